use super::print_json;
use hemicycle_pipeline::Pipeline;

pub fn run_info(pipeline: &Pipeline) -> anyhow::Result<()> {
    print_json(&pipeline.info())
}

pub fn run_clear(pipeline: &Pipeline) -> anyhow::Result<()> {
    pipeline.clear()?;
    print_json(&serde_json::json!({ "cleared": true }))
}

pub fn run_warm(pipeline: &Pipeline, legislature: u32) -> anyhow::Result<()> {
    print_json(&pipeline.warm(legislature))
}
