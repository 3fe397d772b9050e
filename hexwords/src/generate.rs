//! Assemble a source file and render the result as a `const` array.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use thiserror::Error;
use tracing::info;

use crate::{
    assembler::Assembler,
    dump::{HexDump, ParseError, ParseOptions},
    format::{ArrayName, ConstArray, SourceComment},
    layout::Layout,
    runner::RunError,
};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("couldn't read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("couldn't create {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("assembling failed")]
    Assemble(#[from] RunError),
    #[error("malformed hex dump {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("couldn't write output")]
    Write(#[from] io::Error),
}

/// Drives one assembly-to-array run.
pub struct Generator<A> {
    layout: Layout,
    assembler: A,
    options: ParseOptions,
}

impl<A: Assembler> Generator<A> {
    pub fn new(layout: Layout, assembler: A, options: ParseOptions) -> Self {
        Self {
            layout,
            assembler,
            options,
        }
    }

    /// Prints the source of `name` as a comment, assembles it and prints the
    /// resulting words as `const <array_name>: [u32; N]`.
    ///
    /// The comment is written before the assembler runs. Nothing else is
    /// written if assembling fails.
    pub fn generate(
        &self,
        name: &str,
        array_name: &ArrayName,
        out: &mut impl Write,
    ) -> Result<(), GenerateError> {
        let asm_path = self.layout.assembly_path(name);
        let hex_path = self.layout.hex_path(name);

        let source = fs::read_to_string(&asm_path).map_err(|source| GenerateError::Read {
            path: asm_path.clone(),
            source,
        })?;
        writeln!(out, "{}", SourceComment(&source))?;
        out.flush()?;

        let hex_dir = self.layout.hex_dir();
        if !hex_dir.is_dir() {
            fs::create_dir_all(&hex_dir).map_err(|source| GenerateError::CreateDir {
                path: hex_dir.clone(),
                source,
            })?;
            info!("Created output directory {}", hex_dir.display());
        }

        info!("Assembling {}", asm_path.display());
        self.assembler.assemble(&asm_path, &hex_path)?;

        let text = fs::read_to_string(&hex_path).map_err(|source| GenerateError::Read {
            path: hex_path.clone(),
            source,
        })?;
        let dump = HexDump::parse(&text, &self.options).map_err(|source| GenerateError::Parse {
            path: hex_path.clone(),
            source,
        })?;
        info!("Read {} words from {}", dump.len(), hex_path.display());

        writeln!(
            out,
            "{}",
            ConstArray {
                name: array_name,
                dump: &dump,
            }
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use mockall::predicate::eq;
    use tempfile::TempDir;

    use super::*;
    use crate::assembler::MockAssembler;
    use crate::dump::ParseMode;

    const SOURCE: &str = "ld r1, 1\nhalt\n";

    fn workspace() -> (TempDir, Layout) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("assembly")).unwrap();
        fs::write(dir.path().join("assembly/prog.s"), SOURCE).unwrap();
        let layout = Layout::new(dir.path());
        (dir, layout)
    }

    /// An assembler that writes `dump` to the output path.
    fn assembler_writing(layout: &Layout, dump: &'static str) -> MockAssembler {
        let mut asm = MockAssembler::new();
        asm.expect_assemble()
            .with(eq(layout.assembly_path("prog")), eq(layout.hex_path("prog")))
            .times(1)
            .returning(move |_, output: &Path| {
                fs::write(output, dump).unwrap();
                Ok(())
            });
        asm
    }

    fn run(
        generator: &Generator<MockAssembler>,
        array_name: &str,
    ) -> (Result<(), GenerateError>, String) {
        let mut out = Vec::new();
        let res = generator.generate("prog", &array_name.parse().unwrap(), &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn four_words_fit_on_one_line() {
        let (_dir, layout) = workspace();
        let asm = assembler_writing(&layout, "v3.0 hex words plain\n00001 00002\n00003 0000a\n");
        let generator = Generator::new(layout, asm, ParseOptions::default());

        let (res, out) = run(&generator, "CODE");
        res.unwrap();
        assert_eq!(
            out,
            "/*\nld r1, 1\nhalt\n\n*/\n\
             const CODE: [u32; 4] = [ 0x00001u32, 0x00002u32, 0x00003u32, 0x0000au32, \n];\n"
        );
    }

    #[test]
    fn creates_hex_dir() {
        let (dir, layout) = workspace();
        let asm = assembler_writing(&layout, "v3.0 hex words plain\n");
        let generator = Generator::new(layout, asm, ParseOptions::default());

        let (res, out) = run(&generator, "PMEM");
        res.unwrap();
        assert!(dir.path().join("hex").is_dir());
        assert!(out.ends_with("const PMEM: [u32; 0] = [ ];\n"));
    }

    #[test]
    fn assembler_failure_stops_before_array() {
        let (_dir, layout) = workspace();
        let mut asm = MockAssembler::new();
        asm.expect_assemble().times(1).returning(|_, _| {
            Err(RunError::Spawn {
                cmd: "masm".into(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            })
        });
        let generator = Generator::new(layout, asm, ParseOptions::default());

        let (res, out) = run(&generator, "PMEM");
        assert!(matches!(
            res,
            Err(GenerateError::Assemble(RunError::Spawn { .. }))
        ));
        assert_eq!(out, "/*\nld r1, 1\nhalt\n\n*/\n");
    }

    #[test]
    fn missing_source_never_runs_assembler() {
        let dir = tempfile::tempdir().unwrap();
        let mut asm = MockAssembler::new();
        asm.expect_assemble().never();
        let generator = Generator::new(Layout::new(dir.path()), asm, ParseOptions::default());

        let (res, out) = run(&generator, "PMEM");
        assert!(matches!(res, Err(GenerateError::Read { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn hex_dir_that_cannot_be_created() {
        let (dir, layout) = workspace();
        fs::write(dir.path().join("hex"), "not a directory").unwrap();
        let mut asm = MockAssembler::new();
        asm.expect_assemble().never();
        let generator = Generator::new(layout, asm, ParseOptions::default());

        let (res, out) = run(&generator, "PMEM");
        match res.unwrap_err() {
            GenerateError::CreateDir { path, .. } => assert_eq!(path, dir.path().join("hex")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!out.contains("const"));
    }

    #[test]
    fn malformed_dump() {
        let (_dir, layout) = workspace();
        let asm = assembler_writing(&layout, "v3.0 hex words plain\n0001 oops\n");
        let generator = Generator::new(layout, asm, ParseOptions::default());

        let (res, out) = run(&generator, "PMEM");
        match res.unwrap_err() {
            GenerateError::Parse { source, .. } => assert_eq!(source.token, "oops"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!out.contains("const"));
    }

    #[test]
    fn lenient_dump() {
        let (_dir, layout) = workspace();
        let asm = assembler_writing(&layout, "v3.0 hex words plain\n0001 oops\n");
        let options = ParseOptions {
            mode: ParseMode::Lenient,
            width: None,
        };
        let generator = Generator::new(layout, asm, options);

        let (res, out) = run(&generator, "PMEM");
        res.unwrap();
        assert!(out.ends_with("const PMEM: [u32; 1] = [ 0x0001u32, ];\n"));
    }
}
