use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const MAX_VAL: u8 = 255;

    pub const fn of_rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const fn black() -> Self {
        Self::of_rgb(0, 0, 0)
    }
}

/// Anything that can take per-pixel color writes from the render driver.
pub trait FrameSink {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn put(&mut self, x: usize, y: usize, col: Color);
}

/// In-memory framebuffer, row 0 at the top.
#[derive(Clone, Debug)]
pub struct Image {
    width: usize,
    height: usize,
    buffer: Vec<Vec<Color>>,
}

impl Image {
    pub fn new(width: usize, height: usize) -> Self {
        let buffer = vec![vec![Color::black(); width]; height];

        Self {
            width,
            height,
            buffer,
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Color {
        self.buffer[y][x]
    }

    pub fn to_ppm(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        let mut file = BufWriter::new(file);

        write!(
            file,
            "P3\n{} {}\n{}\n",
            self.width,
            self.height,
            Color::MAX_VAL
        )?;

        for row in self.buffer.iter() {
            for col in row {
                write!(file, "{} {} {} ", col.r, col.g, col.b)?;
            }
            writeln!(file)?;
        }
        file.flush()
            .with_context(|| format!("writing {}", path.display()))?;

        Ok(())
    }
}

impl FrameSink for Image {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn put(&mut self, x: usize, y: usize, col: Color) {
        self.buffer[y][x] = col;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get() {
        let mut img = Image::new(3, 2);
        img.put(2, 1, Color::of_rgb(1, 2, 3));
        assert_eq!(img.get(2, 1), Color::of_rgb(1, 2, 3));
        assert_eq!(img.get(0, 0), Color::black());
    }

    #[test]
    fn ppm_layout() {
        let mut img = Image::new(2, 2);
        img.put(0, 0, Color::of_rgb(255, 0, 0));
        img.put(1, 1, Color::of_rgb(0, 0, 9));

        let path = std::env::temp_dir().join(format!("sphere-caster-{}.ppm", std::process::id()));
        img.to_ppm(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("P3"));
        assert_eq!(lines.next(), Some("2 2"));
        assert_eq!(lines.next(), Some("255"));
        assert_eq!(lines.next(), Some("255 0 0 0 0 0 "));
        assert_eq!(lines.next(), Some("0 0 0 0 0 9 "));
    }
}
