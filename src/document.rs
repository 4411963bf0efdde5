//! Whole-document output: the XML declaration followed by the root element.

use std::{
    fmt::{self, Write as _},
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use tracing::{debug, instrument};

use crate::{
    error::{Error, Result},
    formatter::{FormatConfig, XmlFormatter},
    node::Element,
};

/// Declaration line written before the root element
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

impl Element {
    /// Renders a complete document with this element as the root, using the
    /// default [`FormatConfig`].
    ///
    /// ```
    /// use lwdom::new_element;
    /// # fn main() -> lwdom::Result<()> {
    /// let xml = new_element("root")?
    ///     .append_child(new_element("child")?.append_text("hi"))
    ///     .write_to_string();
    /// assert_eq!(
    ///     xml,
    ///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root>\n <child>\n  hi\n </child>\n</root>\n"
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn write_to_string(&self) -> String {
        self.write_to_string_with(&FormatConfig::default())
    }

    pub fn write_to_string_with(&self, config: &FormatConfig) -> String {
        let mut out = String::from(XML_DECLARATION);
        // writing into a String cannot fail
        let _ = XmlFormatter::write_element(
            &mut out,
            self,
            config.depth,
            config.indent.as_deref(),
        );
        out
    }

    /// Streams the document into a caller-owned sink.
    ///
    /// The sink is flushed but never closed. On failure part of the document
    /// may already have been written.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        self.write_to_with(out, &FormatConfig::default())
    }

    #[instrument(level = "debug", skip_all, fields(root = %self.name()))]
    pub fn write_to_with<W: Write + ?Sized>(
        &self,
        out: &mut W,
        config: &FormatConfig,
    ) -> Result<()> {
        let mut writer = BufWriter::new(out);
        let mut sink = IoSink::new(&mut writer);

        let rendered = sink.write_str(XML_DECLARATION).and_then(|()| {
            XmlFormatter::write_element(&mut sink, self, config.depth, config.indent.as_deref())
        });
        if rendered.is_err() {
            return Err(sink.into_error());
        }
        let bytes = sink.written;

        writer.flush()?;
        debug!(bytes, "document written");
        Ok(())
    }

    /// Writes the document to `path`, creating the file or truncating an
    /// existing one. The file is closed before returning, including on
    /// failure, and may be left partially written.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write_to_path_with(path, &FormatConfig::default())
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(root = %self.name(), path = %path.as_ref().display())
    )]
    pub fn write_to_path_with(
        &self,
        path: impl AsRef<Path>,
        config: &FormatConfig,
    ) -> Result<()> {
        let path = path.as_ref();
        let mut file = File::create(path)
            .map_err(|e| Error::io(format_args!("cannot create {}", path.display()), e))?;
        debug!("output file opened");

        self.write_to_with(&mut file, config)
            .map_err(|e| e.context(format_args!("cannot write {}", path.display())))
    }
}

/// Adapts an `io::Write` for the `fmt::Write` based renderer, keeping the
/// first I/O error so it can be reported instead of `fmt::Error`. `written`
/// counts bytes handed to the buffered writer, not bytes that reached the sink.
struct IoSink<'a, W: ?Sized> {
    inner: &'a mut W,
    written: usize,
    error: Option<io::Error>,
}

impl<'a, W: Write + ?Sized> IoSink<'a, W> {
    fn new(inner: &'a mut W) -> Self {
        Self {
            inner,
            written: 0,
            error: None,
        }
    }

    fn into_error(self) -> Error {
        let source = self
            .error
            .unwrap_or_else(|| io::Error::other("formatter error"));
        Error::io("write failed", source)
    }
}

impl<W: Write + ?Sized> fmt::Write for IoSink<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.inner.write_all(s.as_bytes()) {
            Ok(()) => {
                self.written += s.len();
                Ok(())
            }
            Err(e) => {
                self.error = Some(e);
                Err(fmt::Error)
            }
        }
    }
}
