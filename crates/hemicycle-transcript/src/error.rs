use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("member {0} is not XML")]
    NotXml(String),

    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("root element is <{0}>, expected <compteRendu>")]
    NotTranscript(String),
}
