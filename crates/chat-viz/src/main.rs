mod bootstrap;

use anyhow::Result;
use clap::Parser;
use viz_core::bucket::Bucket;
use viz_core::config::ChatConfig;
use viz_core::error::VizError;
use viz_core::sentiment::SentimentAnalyzer;
use viz_core::settings::Settings;
use viz_data::aggregator::FrequencyAggregator;
use viz_data::{export, parser, sentiment};
use viz_render::chart;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("chat-viz v{} starting", env!("CARGO_PKG_VERSION"));

    let text = std::fs::read_to_string(&settings.input).map_err(|source| VizError::FileRead {
        path: settings.input.clone(),
        source,
    })?;

    let participants = parser::detect_participants(&text, &settings.input)?;
    tracing::info!("Detected {} participants", participants.len());

    let config = ChatConfig::new(settings.input.clone(), participants);
    let messages = parser::parse_messages(&text, &config)?;
    tracing::info!("Parsed {} messages", messages.len());

    if let Some(csv_path) = &settings.csv_out {
        export::write_csv(&messages, csv_path)?;
        tracing::info!("Exported records to {}", csv_path.display());
    }

    std::fs::create_dir_all(&settings.out_dir)?;

    for bucket in [Bucket::ByTime, Bucket::ByDate] {
        let rows = FrequencyAggregator::aggregate(&messages, bucket);
        let path = chart::render_frequency(&rows, bucket, &settings.out_dir)?;
        tracing::info!("Wrote {}", path.display());
    }

    if settings.sentiment {
        let analyzer = SentimentAnalyzer::new();
        for bucket in [Bucket::ByTime, Bucket::ByDate] {
            let rows = sentiment::aggregate_sentiment(&messages, bucket, &analyzer);
            let path = chart::render_sentiment(&rows, bucket, &settings.out_dir)?;
            tracing::info!("Wrote {}", path.display());
        }
    }

    Ok(())
}
