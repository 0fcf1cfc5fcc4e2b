use super::print_json;
use hemicycle_pipeline::Pipeline;
use hemicycle_transcript::SpeakerTally;

pub fn run_list(pipeline: &Pipeline, legislature: u32, limit: Option<usize>) -> anyhow::Result<()> {
    print_json(&pipeline.get_debates_list(legislature, limit))
}

pub fn run_show(pipeline: &Pipeline, uid: &str, legislature: u32, tally: bool) -> anyhow::Result<()> {
    if tally {
        return print_json(&pipeline.analyze_debate(&SpeakerTally, uid, legislature));
    }
    let paragraphs = pipeline.get_debate_full_text(uid, legislature);
    if paragraphs.is_empty() {
        tracing::warn!(uid, "no paragraphs found");
    }
    print_json(&paragraphs)
}
