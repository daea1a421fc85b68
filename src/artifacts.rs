use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use decoder::conformance::{self, FIXTURE_PATH};
use decoder::dispatch::DispatchTable;
use decoder::emit::{self, ArrayDeclaration};
use decoder::error::GenerateError;
use decoder::family::TableFamily;

/// Directory receiving the table fragments.
pub const TABLE_DIR: &str = "generated";

#[derive(Debug, Clone, Copy)]
pub enum ArtifactKind {
    /// Bare list of entries, the surrounding array lives in the consumer.
    Fragment(TableFamily),

    /// Entries wrapped in their array declaration.
    Declaration(TableFamily, ArrayDeclaration<'static>),

    /// Binary decoder conformance ROM.
    Fixture,
}

#[derive(Debug, Clone, Copy)]
pub struct Artifact {
    /// Path relative to the output root.
    pub path: &'static str,
    pub kind: ArtifactKind,
}

pub const ARTIFACTS: [Artifact; 6] = [
    Artifact {
        path: "generated/arm_primary.inc",
        kind: ArtifactKind::Declaration(
            TableFamily::ArmPrimary,
            ArrayDeclaration {
                element_type: "opcodeCallback_t",
                name: "opcodeDecoderTable",
            },
        ),
    },
    Artifact {
        path: "generated/arm_sdt_register_offset.inc",
        kind: ArtifactKind::Fragment(TableFamily::ArmSdtRegisterOffset),
    },
    Artifact {
        path: "generated/arm_sdt_pre_indexed.inc",
        kind: ArtifactKind::Fragment(TableFamily::ArmSdtPreIndexed),
    },
    Artifact {
        path: "generated/thumb_wide.inc",
        kind: ArtifactKind::Declaration(
            TableFamily::ThumbWide,
            ArrayDeclaration {
                element_type: "thumbOpcodeCallback_t",
                name: "opcodeDecoderTable",
            },
        ),
    },
    Artifact {
        path: "generated/thumb_narrow.inc",
        kind: ArtifactKind::Fragment(TableFamily::ThumbNarrow),
    },
    Artifact {
        path: FIXTURE_PATH,
        kind: ArtifactKind::Fixture,
    },
];

impl Artifact {
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.kind {
            ArtifactKind::Fragment(family) => {
                emit::write_fragment(&DispatchTable::build(family), out)
            }
            ArtifactKind::Declaration(family, declaration) => {
                emit::write_declaration(&DispatchTable::build(family), declaration, out)
            }
            ArtifactKind::Fixture => conformance::write_fixture(out).map(|_| ()),
        }
    }
}

/// Writes every artifact under `root`. Stops at the first failure.
pub fn generate_all(root: &Path) -> Result<(), GenerateError> {
    let table_dir = root.join(TABLE_DIR);
    fs::create_dir_all(&table_dir).map_err(|e| GenerateError::new(&table_dir, e))?;

    for artifact in &ARTIFACTS {
        write_artifact(root, artifact)?;
    }

    Ok(())
}

fn write_artifact(root: &Path, artifact: &Artifact) -> Result<(), GenerateError> {
    let path = root.join(artifact.path);
    write_staged(&path, |out| artifact.render(out))?;

    tracing::info!("wrote {}", path.display());

    Ok(())
}

/// Sibling of `path` that receives the bytes until they are complete.
fn staging_path(path: &Path) -> PathBuf {
    let mut staging = path.as_os_str().to_owned();
    staging.push(".partial");
    PathBuf::from(staging)
}

/// Renders into a staging file and moves it over `path` once flushed, so
/// `path` never holds a truncated artifact.
fn write_staged<F>(path: &Path, render: F) -> Result<(), GenerateError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let staging = staging_path(path);
    let file = File::create(&staging).map_err(|e| GenerateError::new(path, e))?;

    let mut out = BufWriter::new(file);
    let written = render(&mut out)
        .and_then(|()| out.flush())
        .and_then(|()| {
            drop(out);
            fs::rename(&staging, path)
        });

    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(&staging) {
            tracing::warn!("could not remove {}: {cleanup}", staging.display());
        }
        return Err(GenerateError::new(path, e));
    }

    Ok(())
}
