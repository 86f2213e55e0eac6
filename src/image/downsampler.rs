use std::sync::mpsc;

use threadpool::ThreadPool;

use super::{Image, RgbPixel};

pub struct Downsampler<'a> {
    image: &'a Image,
    threadpool: &'a ThreadPool,
}

impl<'a> Downsampler<'a> {
    pub fn new(image: &'a Image, threadpool: &'a ThreadPool) -> Self {
        Self { image, threadpool }
    }

    /// Produces a new image at half width and half height. Every output
    /// pixel is the rounded average of a 2x2 source block; an odd trailing
    /// source row or column does not contribute. Sources narrower or
    /// shorter than 2 pixels yield a degenerate image with zero pixels.
    pub fn downsample(&self) -> Image {
        let width = self.image.width() / 2;
        let height = self.image.height() / 2;
        let pixels = if width == 0 || height == 0 {
            Vec::new()
        } else if self.threadpool.max_count() > 1 {
            self.downsample_rows_on_pool(width, height)
        } else {
            self.downsample_rows(width, height)
        };
        Image::new(
            self.image.format(),
            width,
            height,
            self.image.max_color_value(),
            pixels,
        )
    }

    fn downsample_rows(&self, width: u32, height: u32) -> Vec<RgbPixel> {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for row_index in 0..height {
            let top = self.image.row(2 * row_index);
            let bottom = self.image.row(2 * row_index + 1);
            pixels.extend(downsample_row(top, bottom, width));
        }
        pixels
    }

    /// Row parallel variant. Workers receive copies of their two source
    /// rows and the rows are reassembled in order, so the result is
    /// identical to the sequential path.
    fn downsample_rows_on_pool(&self, width: u32, height: u32) -> Vec<RgbPixel> {
        let (sender, receiver) = mpsc::channel();
        for row_index in 0..height {
            let top = self.image.row(2 * row_index).to_vec();
            let bottom = self.image.row(2 * row_index + 1).to_vec();
            let sender = sender.clone();
            self.threadpool.execute(move || {
                let row = downsample_row(&top, &bottom, width);
                sender
                    .send((row_index, row))
                    .expect("Receiver must outlive the downsampling workers");
            });
        }
        drop(sender);
        let mut rows: Vec<Vec<RgbPixel>> = vec![Vec::new(); height as usize];
        for (row_index, row) in receiver {
            rows[row_index as usize] = row;
        }
        rows.into_iter().flatten().collect()
    }
}

fn downsample_row(top: &[RgbPixel], bottom: &[RgbPixel], output_width: u32) -> Vec<RgbPixel> {
    (0..output_width as usize)
        .map(|column_index| {
            let left = 2 * column_index;
            average_block([
                top[left],
                top[left + 1],
                bottom[left],
                bottom[left + 1],
            ])
        })
        .collect()
}

fn average_block(block: [RgbPixel; 4]) -> RgbPixel {
    RgbPixel::new(
        average_channel(block.map(|pixel| pixel.red)),
        average_channel(block.map(|pixel| pixel.green)),
        average_channel(block.map(|pixel| pixel.blue)),
    )
}

/// Mean of four channel values, rounded half away from zero. For unsigned
/// inputs `(sum + 2) / 4` computes exactly that.
fn average_channel(values: [u8; 4]) -> u8 {
    let sum: u32 = values.iter().map(|&value| u32::from(value)).sum();
    ((sum + 2) / 4) as u8
}
