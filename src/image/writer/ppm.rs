use std::io::Write;

use super::super::{Image, ImageWriter, PixelFormat};
use crate::error::{EncodingError, Error};

pub struct PPMImageWriter<'a, T: Write> {
    writer: T,
    image: &'a Image,
}

impl<'a, T: Write> PPMImageWriter<'a, T> {
    pub fn new(writer: T, image: &'a Image) -> Self {
        Self { writer, image }
    }

    /// Fails when the pixel vector does not match the declared dimensions.
    /// Nothing is written in that case.
    fn check_pixel_count(&self) -> crate::Result<()> {
        if self.image.pixels().len() != self.image.pixel_count() {
            return Err(EncodingError::PixelCountMismatch {
                width: self.image.width(),
                height: self.image.height(),
                pixel_count: self.image.pixels().len(),
            }
            .into());
        }
        Ok(())
    }

    fn write_header(&mut self) -> crate::Result<()> {
        self.writer
            .write_all(self.image.format().magic_number())
            .map_err(Error::FailedToWriteImageData)?;
        writeln!(self.writer).map_err(Error::FailedToWriteImageData)?;
        writeln!(
            self.writer,
            "{} {} {}",
            self.image.width(),
            self.image.height(),
            self.image.max_color_value()
        )
        .map_err(Error::FailedToWriteImageData)
    }

    /// One output line per raster row, a single space after every value;
    /// the space after the last pixel of a row is replaced by a newline.
    fn write_ascii_pixel_data(&mut self) -> crate::Result<()> {
        if self.image.pixel_count() == 0 {
            return Ok(());
        }
        let last_column_index = self.image.width() as usize - 1;
        for row_index in 0..self.image.height() {
            for (column_index, pixel) in self.image.row(row_index).iter().enumerate() {
                write!(
                    self.writer,
                    "{} {} {}",
                    pixel.red, pixel.green, pixel.blue
                )
                .map_err(Error::FailedToWriteImageData)?;
                let separator = if column_index == last_column_index {
                    b"\n"
                } else {
                    b" "
                };
                self.writer
                    .write_all(separator)
                    .map_err(Error::FailedToWriteImageData)?;
            }
        }
        Ok(())
    }

    fn write_binary_pixel_data(&mut self) -> crate::Result<()> {
        let mut buffer = Vec::with_capacity(self.image.pixels().len() * 3);
        for pixel in self.image.pixels() {
            buffer.extend([pixel.red, pixel.green, pixel.blue]);
        }
        self.writer
            .write_all(&buffer)
            .map_err(Error::FailedToWriteImageData)
    }
}

impl<T: Write> ImageWriter for PPMImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        self.check_pixel_count()?;
        self.write_header()?;
        match self.image.format() {
            PixelFormat::Ascii => self.write_ascii_pixel_data()?,
            PixelFormat::Binary => self.write_binary_pixel_data()?,
        }
        self.writer.flush().map_err(Error::FailedToWriteImageData)
    }
}

#[cfg(test)]
mod test {
    use super::PPMImageWriter;
    use crate::error::{EncodingError, Error};
    use crate::image::reader::ppm::PPMImageReader;
    use crate::image::{Image, ImageReader, ImageWriter, PixelFormat, RgbPixel};

    fn write_ppm_bytes(image: &Image) -> crate::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        PPMImageWriter::new(&mut bytes, image).write_image()?;
        Ok(bytes)
    }

    #[test]
    fn writes_ascii_rows_with_exact_separators() {
        let channels: Vec<u8> = (1..=12).collect();
        let pixels = channels
            .chunks_exact(3)
            .map(|channel| RgbPixel::new(channel[0], channel[1], channel[2]))
            .collect();
        let image = Image::new(PixelFormat::Ascii, 2, 2, 255, pixels);
        let bytes = write_ppm_bytes(&image).unwrap();
        let expected = "P3\n2 2 255\n1 2 3 4 5 6\n7 8 9 10 11 12\n";
        assert_eq!(String::from_utf8(bytes).unwrap(), expected);
    }

    #[test]
    fn writes_binary_payload_without_separators() {
        let pixels = vec![RgbPixel::new(100, 150, 200); 4];
        let image = Image::new(PixelFormat::Binary, 2, 2, 255, pixels);
        let bytes = write_ppm_bytes(&image).unwrap();
        let mut expected = b"P6\n2 2 255\n".to_vec();
        expected.extend(std::iter::repeat([100u8, 150, 200]).take(4).flatten());
        assert_eq!(bytes, expected);
    }

    #[test]
    fn writes_header_only_for_zero_pixel_image() {
        let image = Image::new(PixelFormat::Ascii, 0, 2, 255, Vec::new());
        let bytes = write_ppm_bytes(&image).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "P3\n0 2 255\n");
    }

    #[test]
    fn rejects_inconsistent_pixel_count() {
        let pixels = vec![RgbPixel::default(); 3];
        let image = Image::new(PixelFormat::Ascii, 2, 2, 255, pixels);
        let result = write_ppm_bytes(&image);
        if let Err(Error::Encoding(EncodingError::PixelCountMismatch { pixel_count, .. })) = result
        {
            assert_eq!(pixel_count, 3);
            return;
        }
        panic!("Inconsistent pixel count not detected");
    }

    #[test]
    fn ascii_image_roundtrips() {
        let pixels = (0..6u8)
            .map(|index| RgbPixel::new(index, 40 * index, 255 - index))
            .collect();
        let image = Image::new(PixelFormat::Ascii, 3, 2, 255, pixels);
        let bytes = write_ppm_bytes(&image).unwrap();
        let decoded = PPMImageReader::new(bytes.as_slice()).read_image().unwrap();
        assert_eq!(decoded.format(), image.format());
        assert_eq!(decoded.width(), image.width());
        assert_eq!(decoded.height(), image.height());
        assert_eq!(decoded.max_color_value(), image.max_color_value());
        assert_eq!(decoded.pixels(), image.pixels());
    }

    #[test]
    fn binary_image_roundtrips() {
        let pixels = (0..6u8)
            .map(|index| RgbPixel::new(index, 40 * index, 255 - index))
            .collect();
        let image = Image::new(PixelFormat::Binary, 2, 3, 255, pixels);
        let bytes = write_ppm_bytes(&image).unwrap();
        let decoded = PPMImageReader::new(bytes.as_slice()).read_image().unwrap();
        assert_eq!(decoded.format(), image.format());
        assert_eq!(decoded.width(), image.width());
        assert_eq!(decoded.height(), image.height());
        assert_eq!(decoded.max_color_value(), image.max_color_value());
        assert_eq!(decoded.pixels(), image.pixels());
    }
}
