use crate::Result;

use image::{ImageFormat, ImageReader};
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// The two office design renders shipped next to the binary.
pub const OFFICE_DESIGNS: [Conversion<'static>; 2] = [
    Conversion::new("Office_Design_1.gif", "Office_Design_1.png"),
    Conversion::new("Office_Design_2.gif", "Office_Design_2.png"),
];

/// One source GIF and the PNG written from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion<'a> {
    pub input: &'a str,
    pub output: &'a str,
}

impl<'a> Conversion<'a> {
    pub const fn new(input: &'a str, output: &'a str) -> Self {
        Self { input, output }
    }

    pub fn run(&self) -> Result<()> {
        convert(self.input, self.output)
    }
}

impl fmt::Display for Conversion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Converted {} to {}", self.input, self.output)
    }
}

/// Decodes `input` and writes its first frame to `output` as PNG.
///
/// The input format is sniffed from the file content. The output file is only
/// opened once decoding has succeeded.
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();
    let start_time = Instant::now();

    let img = ImageReader::open(input)?.with_guessed_format()?.decode()?;
    debug!(
        "Decoded {} ({}x{}, {:?})",
        input.display(),
        img.width(),
        img.height(),
        img.color()
    );

    img.save_with_format(output, ImageFormat::Png)?;
    trace!(
        "Converting {} to {} took {:?}",
        input.display(),
        output.display(),
        start_time.elapsed()
    );
    Ok(())
}

/// Runs each conversion in order, writing its confirmation line to `out`
/// after it succeeds. Stops at the first failure.
pub fn convert_all(conversions: &[Conversion<'_>], mut out: impl Write) -> Result<()> {
    for conversion in conversions {
        conversion.run()?;
        writeln!(out, "{}", conversion)?;
    }
    Ok(())
}
