use super::print_json;
use hemicycle_pipeline::Pipeline;

pub fn run_deputies(pipeline: &Pipeline, legislature: u32) -> anyhow::Result<()> {
    print_json(&pipeline.get_deputies(legislature))
}

pub fn run_bills(pipeline: &Pipeline, legislature: u32, limit: Option<usize>) -> anyhow::Result<()> {
    print_json(&pipeline.get_bills(legislature, limit))
}

pub fn run_votes(pipeline: &Pipeline, legislature: u32, limit: Option<usize>) -> anyhow::Result<()> {
    print_json(&pipeline.get_votes(legislature, limit))
}

pub fn run_amendments(
    pipeline: &Pipeline,
    legislature: u32,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    print_json(&pipeline.get_amendments(legislature, limit))
}

pub fn run_activity(pipeline: &Pipeline, legislature: u32) -> anyhow::Result<()> {
    print_json(&pipeline.activity(legislature))
}

pub fn run_stats(pipeline: &Pipeline, legislature: u32) -> anyhow::Result<()> {
    let mut output = serde_json::to_value(pipeline.statistics(legislature))?;
    output["vote_count"] = serde_json::json!(pipeline.vote_count(legislature));
    print_json(&output)
}
