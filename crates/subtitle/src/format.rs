use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::types::Chunk;

const INPUT_EXTENSION: &str = "srt";
const OUTPUT_EXTENSION: &str = "txt";

/// Render one chunk: time range header, text, then three blank lines.
pub fn render_chunk(chunk: &Chunk) -> String {
    format!("{} --> {}\n{}\n\n\n", chunk.start, chunk.end, chunk.text)
}

/// Render chunks in start order, blocks joined by a single newline.
pub fn render(chunks: &[Chunk]) -> String {
    let mut ordered: Vec<&Chunk> = chunks.iter().collect();
    ordered.sort_by_key(|c| c.start);

    ordered
        .into_iter()
        .map(render_chunk)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Where the rendered text for `input` goes: a `.srt` extension becomes
/// `.txt`, and any `srt` directory on the way becomes `txt`.
pub fn output_path(input: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    let components: Vec<Component<'_>> = input.components().collect();
    let last = components.len().saturating_sub(1);

    for (i, component) in components.into_iter().enumerate() {
        match component {
            Component::Normal(name) if i < last && name == OsStr::new(INPUT_EXTENSION) => {
                out.push(OUTPUT_EXTENSION);
            }
            other => out.push(other.as_os_str()),
        }
    }

    if out.extension() == Some(OsStr::new(INPUT_EXTENSION)) {
        out.set_extension(OUTPUT_EXTENSION);
    }
    out
}
