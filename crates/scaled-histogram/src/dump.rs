//! Dumping bin contents to an external sink
//!
//! The dump loop walks every bin in index order, recovers its edges through
//! the inverse transform, and hands `(index, left_edge, width, count)` to a
//! [`BinSink`]. The sink decides what a record looks like; the three stock
//! sinks reproduce the long-standing text formats and all skip zero-count
//! bins, so dumped output stays sparse and byte-compatible with existing
//! consumers.

use crate::types::Histogram;
use scaled_core::Result;
use std::io::Write;

/// Receiver for per-bin dump records.
///
/// Called once per bin, zero-count bins included; sinks that want sparse
/// output apply the skip themselves (all stock sinks do).
pub trait BinSink {
    /// Accept one bin record.
    fn record(&mut self, index: usize, left_edge: f64, width: f64, count: u64) -> Result<()>;
}

/// Any closure with the record signature is a sink.
impl<F> BinSink for F
where
    F: FnMut(usize, f64, f64, u64) -> Result<()>,
{
    fn record(&mut self, index: usize, left_edge: f64, width: f64, count: u64) -> Result<()> {
        self(index, left_edge, width, count)
    }
}

impl Histogram {
    /// Emit every bin, in index order, to `sink`.
    ///
    /// The left edge starts at the domain minimum and each right edge is the
    /// value-of-bin lookup at the next index. Panics if any bin's right edge
    /// is not strictly above its left; only a non-monotone transform can
    /// cause that, and construction should have refused it.
    pub fn dump<S: BinSink>(&self, sink: &mut S) -> Result<()> {
        let mut left_border = self.min();
        for i in 0..self.capacity() {
            let right_border = self.value(i + 1);
            assert!(
                right_border - left_border > 0.0,
                "bin {i}: right edge {right_border} not above left edge {left_border}"
            );
            sink.record(i, left_border, right_border - left_border, self.bins()[i])?;
            left_border = right_border;
        }
        Ok(())
    }
}

/// Generic record shape: index, left edge, count, density.
///
/// One line per non-empty bin, `\t%3d/%f\t%d\t%f\n` in printf terms.
pub struct GenericDumper<W: Write> {
    writer: W,
}

impl<W: Write> GenericDumper<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> BinSink for GenericDumper<W> {
    fn record(&mut self, index: usize, left_edge: f64, width: f64, count: u64) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        writeln!(
            self.writer,
            "\t{index:3}/{left_edge:.6}\t{count}\t{:.6}",
            count as f64 / width
        )?;
        Ok(())
    }
}

/// Enum-style record shape: index, value cast to integer, count.
///
/// `%2d\t %5d\t %5d\n` in printf terms; used for histograms whose bins are
/// enumeration variants.
pub struct EnumDumper<W: Write> {
    writer: W,
}

impl<W: Write> EnumDumper<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> BinSink for EnumDumper<W> {
    fn record(&mut self, index: usize, left_edge: f64, _width: f64, count: u64) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        writeln!(self.writer, "{index:2}\t {:5}\t {count:5}", left_edge as i64)?;
        Ok(())
    }
}

/// Plain-bucket record shape: value cast to integer, count.
///
/// `%9d\t%9d\n` in printf terms; the bin index is implicit in the value.
pub struct IntDumper<W: Write> {
    writer: W,
}

impl<W: Write> IntDumper<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> BinSink for IntDumper<W> {
    fn record(&mut self, _index: usize, left_edge: f64, _width: f64, count: u64) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        writeln!(self.writer, "{:9}\t{count:9}", left_edge as i64)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{enum_histogram, int_histogram};

    #[test]
    fn dump_skips_empty_bins_but_loses_no_mass() {
        let mut hist = int_histogram(10).unwrap();
        for v in [0.0, 0.0, 1.0, 5.0, 9.0, 9.0, 9.0] {
            hist.count(v);
        }

        let mut records = Vec::new();
        let mut sink =
            |index: usize, _left: f64, _width: f64, count: u64| -> scaled_core::Result<()> {
                if count > 0 {
                    records.push((index, count));
                }
                Ok(())
            };
        hist.dump(&mut sink).unwrap();

        assert_eq!(records, vec![(0, 2), (1, 1), (5, 1), (9, 3)]);
        let emitted: u64 = records.iter().map(|&(_, c)| c).sum();
        assert_eq!(emitted, hist.total_count());
    }

    #[test]
    fn sinks_see_every_bin() {
        let hist = int_histogram(7).unwrap();
        let mut calls = 0usize;
        let mut sink =
            |_index: usize, _left: f64, _width: f64, _count: u64| -> scaled_core::Result<()> {
                calls += 1;
                Ok(())
            };
        hist.dump(&mut sink).unwrap();
        assert_eq!(calls, 7);
    }

    #[test]
    fn edges_are_strictly_increasing() {
        let hist = crate::builders::log_histogram(30, 0.0, 60_000.0).unwrap();
        let mut prev_left = f64::NEG_INFINITY;
        let mut bins_seen = 0usize;
        let mut sink =
            |_index: usize, left: f64, width: f64, _count: u64| -> scaled_core::Result<()> {
                assert!(left > prev_left);
                assert!(width > 0.0);
                prev_left = left;
                bins_seen += 1;
                Ok(())
            };
        hist.dump(&mut sink).unwrap();
        assert_eq!(bins_seen, hist.capacity());
    }

    #[test]
    fn generic_dumper_format() {
        let mut hist = int_histogram(10).unwrap();
        hist.count(5.0);
        hist.count(5.0);

        let mut dumper = GenericDumper::new(Vec::new());
        hist.dump(&mut dumper).unwrap();
        let text = String::from_utf8(dumper.into_inner()).unwrap();

        // One record: bin 5, left edge 5.0, width 1, count 2, density 2.
        assert_eq!(text, "\t  5/5.000000\t2\t2.000000\n");
    }

    #[test]
    fn enum_dumper_format() {
        let mut hist = enum_histogram(3).unwrap();
        hist.count(2.0);
        hist.count(100.0); // out of range high

        let mut dumper = EnumDumper::new(Vec::new());
        hist.dump(&mut dumper).unwrap();
        let text = String::from_utf8(dumper.into_inner()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], " 3\t     2\t     1");
        assert_eq!(lines[1], " 5\t     4\t     1");
    }

    #[test]
    fn int_dumper_format() {
        let mut hist = int_histogram(1000).unwrap();
        for _ in 0..4 {
            hist.count(250.0);
        }

        let mut dumper = IntDumper::new(Vec::new());
        hist.dump(&mut dumper).unwrap();
        let text = String::from_utf8(dumper.into_inner()).unwrap();

        assert_eq!(text, "      250\t        4\n");
    }

    #[test]
    fn sink_errors_propagate() {
        let mut hist = int_histogram(4).unwrap();
        hist.count(1.0);

        let mut failing =
            |_index: usize, _left: f64, _width: f64, _count: u64| -> scaled_core::Result<()> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed").into())
            };
        assert!(hist.dump(&mut failing).is_err());
    }
}
