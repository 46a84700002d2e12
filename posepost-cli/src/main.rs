use clap::Parser;
use posepost::{DetectConfig, Detection, Detector, Size};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "PosePost CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    tensor_path: String,
    output_path: Option<String>,
    confidence_threshold: f32,
    iou_threshold: f32,
    model_input_size: [f32; 2],
    target_frame_size: [f32; 2],
    parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        let cfg = DetectConfig::default();
        Self {
            tensor_path: String::new(),
            output_path: None,
            confidence_threshold: cfg.confidence_threshold,
            iou_threshold: cfg.iou_threshold,
            model_input_size: [cfg.model_input_size.width, cfg.model_input_size.height],
            target_frame_size: [cfg.target_frame_size.width, cfg.target_frame_size.height],
            parallel: cfg.parallel,
        }
    }
}

/// Tensor dump: `[1, C, A]` shape plus the flat anchor-minor buffer.
#[derive(Debug, Deserialize)]
struct TensorJson {
    shape: [usize; 3],
    data: Vec<f32>,
}

#[derive(Debug, Serialize)]
struct RectRecord {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

#[derive(Debug, Serialize)]
struct KeypointRecord {
    xn: f32,
    yn: f32,
    x: f32,
    y: f32,
    confidence: f32,
}

#[derive(Debug, Serialize)]
struct DetectionRecord {
    confidence: f32,
    box_norm: RectRecord,
    box_frame: RectRecord,
    keypoints: Vec<KeypointRecord>,
}

impl From<Detection> for DetectionRecord {
    fn from(value: Detection) -> Self {
        Self {
            confidence: value.confidence,
            box_norm: RectRecord {
                x: value.bbox.model_norm.x,
                y: value.bbox.model_norm.y,
                w: value.bbox.model_norm.w,
                h: value.bbox.model_norm.h,
            },
            box_frame: RectRecord {
                x: value.bbox.frame_px.x,
                y: value.bbox.frame_px.y,
                w: value.bbox.frame_px.w,
                h: value.bbox.frame_px.h,
            },
            keypoints: value
                .keypoints
                .into_iter()
                .map(|kp| KeypointRecord {
                    xn: kp.model_norm.x,
                    yn: kp.model_norm.y,
                    x: kp.frame_px.x,
                    y: kp.frame_px.y,
                    confidence: kp.confidence,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    detections: Vec<DetectionRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("posepost=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.tensor_path.is_empty() {
        return Err("tensor_path must be set in the config".into());
    }

    let tensor_text = fs::read_to_string(&config.tensor_path)?;
    let tensor: TensorJson = serde_json::from_str(&tensor_text)?;

    let detector = Detector::new(DetectConfig {
        confidence_threshold: config.confidence_threshold,
        iou_threshold: config.iou_threshold,
        model_input_size: Size::new(config.model_input_size[0], config.model_input_size[1]),
        target_frame_size: Size::new(config.target_frame_size[0], config.target_frame_size[1]),
        parallel: config.parallel,
    });

    let detections = detector.detect(&tensor.data, tensor.shape)?;
    let output = Output {
        detections: detections.into_iter().map(DetectionRecord::from).collect(),
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
