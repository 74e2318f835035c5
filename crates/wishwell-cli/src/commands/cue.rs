use std::path::Path;

use wishwell_core::sound::{render_cue_wav, CUE_SAMPLE_RATE_HZ};
use wishwell_core::SoundKind;

use crate::cli::CueKind;
use crate::commands::common::default_cue_path;
use crate::error::CliError;

pub fn run_cue(kind: CueKind, output_path: Option<&Path>) -> Result<(), CliError> {
    let kind = SoundKind::from(kind);
    let wav = render_cue_wav(kind, CUE_SAMPLE_RATE_HZ)?;

    let path = output_path.map_or_else(|| default_cue_path(kind), Path::to_path_buf);
    std::fs::write(&path, &wav)?;

    println!("{}", path.display());
    Ok(())
}
