use anyhow::anyhow;
use formatx::formatx;
use std::fmt::Debug;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub trait Output: Debug {
    fn writer_for_location_key(
        &self,
        location_key: &str,
        file_extension: &str,
    ) -> anyhow::Result<impl Write>;
    /// Whether this output can be considered a no-op and therefore that any code that only writes to the output can be skipped.
    fn is_noop(&self) -> bool {
        false
    }
}

/// Writes each location key to its own file in a directory.
///
/// The file template takes two positional placeholders: the location key, then the file extension,
/// e.g. `"household__{}.{}"`.
#[derive(Debug)]
pub struct FileOutput {
    directory_path: PathBuf,
    file_template: String,
}

impl FileOutput {
    pub fn new(directory_path: PathBuf, file_template: String) -> Self {
        Self {
            directory_path,
            file_template,
        }
    }

    fn file_name(&self, location_key: &str, file_extension: &str) -> anyhow::Result<String> {
        formatx!(&self.file_template, location_key, file_extension)
            .map_err(|err| anyhow!("Could not apply output file template: {err:?}"))
    }
}

impl Output for FileOutput {
    fn writer_for_location_key(
        &self,
        location_key: &str,
        file_extension: &str,
    ) -> anyhow::Result<impl Write> {
        Ok(BufWriter::new(File::create(
            self.directory_path
                .join(self.file_name(location_key, file_extension)?),
        )?))
    }
}

impl Output for &FileOutput {
    fn writer_for_location_key(
        &self,
        location_key: &str,
        file_extension: &str,
    ) -> anyhow::Result<impl Write> {
        <FileOutput as Output>::writer_for_location_key(self, location_key, file_extension)
    }
}

/// An output that goes to nowhere/ a "sink"/ /dev/null.
#[derive(Debug, Default)]
pub struct SinkOutput;

impl Output for SinkOutput {
    fn writer_for_location_key(
        &self,
        _location_key: &str,
        _file_extension: &str,
    ) -> anyhow::Result<impl Write> {
        Ok(io::sink())
    }

    fn is_noop(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn should_fill_file_template() {
        let output = FileOutput::new(PathBuf::from("out"), "house__{}.{}".to_string());
        assert_eq!(
            output.file_name("appliances", "csv").unwrap(),
            "house__appliances.csv"
        );
    }

    #[rstest]
    fn sink_should_be_noop_and_accept_writes() {
        let output = SinkOutput;
        assert!(output.is_noop());
        let mut writer = output.writer_for_location_key("report", "json").unwrap();
        assert!(writer.write_all(b"{}").is_ok());
    }
}
