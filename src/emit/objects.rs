//! Low-level PDF object serialization.
//!
//! [`ObjectWriter`] appends numbered indirect objects to a byte buffer,
//! recording the offset of each object's `N 0 obj` line as it goes. Those
//! offsets become the cross-reference table, so the invariant is strict:
//! the recorded offset must equal the byte position of the object line in
//! the final buffer. The writer only ever appends, which keeps that true.

/// Incremental writer for a single-revision PDF file body.
pub struct ObjectWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl ObjectWriter {
    /// Start a new file with the version header.
    pub fn new() -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"%PDF-1.4\n");
        Self {
            buf,
            offsets: Vec::new(),
        }
    }

    /// Number of objects written so far.
    pub fn object_count(&self) -> usize {
        self.offsets.len()
    }

    /// The object number the next call will allocate.
    pub fn next_id(&self) -> u32 {
        self.offsets.len() as u32 + 1
    }

    /// Append a dictionary (or any non-stream) object, returning its number.
    pub fn add_object(&mut self, body: &str) -> u32 {
        let id = self.next_id();
        self.offsets.push(self.buf.len());
        self.buf
            .extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", id, body).as_bytes());
        id
    }

    /// Append a stream object; `/Length` is the exact byte length of `data`.
    pub fn add_stream(&mut self, data: &[u8]) -> u32 {
        let id = self.next_id();
        self.offsets.push(self.buf.len());
        self.buf
            .extend_from_slice(format!("{} 0 obj\n<< /Length {} >>\nstream\n", id, data.len()).as_bytes());
        self.buf.extend_from_slice(data);
        self.buf.extend_from_slice(b"\nendstream\nendobj\n");
        id
    }

    /// Write the cross-reference table and trailer, consuming the writer.
    ///
    /// The table lists the free-list head plus one 20-byte entry per object
    /// in ascending object-number order; the trailer points `startxref` at
    /// the byte offset of the `xref` keyword.
    pub fn finish(mut self, root: u32, info: Option<u32>) -> Vec<u8> {
        let xref_offset = self.buf.len();
        let size = self.offsets.len() + 1;

        self.buf
            .extend_from_slice(format!("xref\n0 {}\n", size).as_bytes());
        self.buf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &self.offsets {
            self.buf
                .extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }

        let mut trailer = format!("trailer\n<< /Size {} /Root {} 0 R", size, root);
        if let Some(info) = info {
            trailer.push_str(&format!(" /Info {} 0 R", info));
        }
        trailer.push_str(&format!(" >>\nstartxref\n{}\n%%EOF\n", xref_offset));
        self.buf.extend_from_slice(trailer.as_bytes());

        self.buf
    }
}

impl Default for ObjectWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_numbering() {
        let mut writer = ObjectWriter::new();
        assert_eq!(writer.next_id(), 1);
        assert_eq!(writer.add_object("<< /Type /Catalog >>"), 1);
        assert_eq!(writer.add_object("<< /Type /Pages >>"), 2);
        assert_eq!(writer.add_stream(b"BT ET"), 3);
        assert_eq!(writer.object_count(), 3);
    }

    #[test]
    fn test_offsets_match_object_lines() {
        let mut writer = ObjectWriter::new();
        writer.add_object("<< /A 1 >>");
        writer.add_stream(b"stream body");
        writer.add_object("<< /B 2 >>");
        let bytes = writer.finish(1, None);

        for (i, marker) in ["1 0 obj", "2 0 obj", "3 0 obj"].iter().enumerate() {
            let pos = bytes
                .windows(marker.len())
                .position(|w| w == marker.as_bytes())
                .unwrap();
            // xref entry i+1 (after the free head) carries this offset
            let text = String::from_utf8_lossy(&bytes);
            let xref_at = text.find("xref\n").unwrap();
            let entry_start = xref_at + "xref\n0 4\n".len() + 20 * (i + 1);
            let entry = &text[entry_start..entry_start + 20];
            assert_eq!(&entry[..10], format!("{:010}", pos));
            assert!(entry.ends_with("00000 n \n"));
        }
    }

    #[test]
    fn test_stream_length_is_exact() {
        let mut writer = ObjectWriter::new();
        writer.add_stream(b"0123456789");
        let bytes = writer.finish(1, None);
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("<< /Length 10 >>\nstream\n0123456789\nendstream"));
    }

    #[test]
    fn test_trailer_framing() {
        let mut writer = ObjectWriter::new();
        writer.add_object("<< /Type /Catalog >>");
        let bytes = writer.finish(1, None);
        let text = String::from_utf8_lossy(&bytes);

        assert!(bytes.starts_with(b"%PDF-1.4\n"));
        assert!(bytes.ends_with(b"%%EOF\n"));
        assert!(text.contains("trailer\n<< /Size 2 /Root 1 0 R >>"));
        assert!(!text.contains("/Info"));

        let xref_offset = text.find("xref\n").unwrap();
        assert!(text.contains(&format!("startxref\n{}\n", xref_offset)));
    }

    #[test]
    fn test_trailer_with_info() {
        let mut writer = ObjectWriter::new();
        writer.add_object("<< /Type /Catalog >>");
        writer.add_object("<< /Title (t) >>");
        let bytes = writer.finish(1, Some(2));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Root 1 0 R /Info 2 0 R"));
    }
}
