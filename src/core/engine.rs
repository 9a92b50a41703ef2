use crate::core::model::FastaRecord;
use crate::core::sequence;
use rand::Rng;

pub struct RunConfig {
    pub length: usize,
    pub seq_id: String,
    pub description: String,
    pub name: String,
}

pub struct RunOutput {
    pub record: FastaRecord,
}

// Generation first, then the single insertion draw; statistics are computed
// later, at report time, from the annotated sequence.
pub fn run<R: Rng + ?Sized>(cfg: &RunConfig, rng: &mut R) -> RunOutput {
    let backbone = sequence::generate(rng, cfg.length);
    let annotated = sequence::insert_name(rng, &backbone, &cfg.name);
    RunOutput {
        record: FastaRecord {
            id: cfg.seq_id.clone(),
            description: cfg.description.clone(),
            sequence: annotated,
        },
    }
}
