use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use threadpool::ThreadPool;

pub use cli::CLIParser;
pub use error::{EncodingError, Error, FormatError};
use image::{
    downsampler::Downsampler, reader::ppm::PPMImageReader, writer::ppm::PPMImageWriter,
    ImageReader, ImageWriter,
};

mod cli;
mod error;
pub mod image;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
    number_of_threads: usize,
}

fn check_input_file_extension(file_path: &Path) -> Result<()> {
    if file_path.extension().is_some_and(|extension| extension == "ppm") {
        return Ok(());
    }
    Err(Error::InputFileIsNotAPpmFile(
        file_path.to_string_lossy().into_owned(),
    ))
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.to_string_lossy().into_owned(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.to_string_lossy().into_owned(), e)
        })
}

pub fn downsample_ppm(arguments: &Arguments) -> Result<()> {
    check_input_file_extension(&arguments.input_file)?;
    let input_file = open_input_file(&arguments.input_file)?;
    let image = PPMImageReader::new(BufReader::new(&input_file)).read_image()?;
    log::info!(
        "Decoded {}x{} image with max color value {}",
        image.width(),
        image.height(),
        image.max_color_value()
    );
    let threadpool = ThreadPool::new(arguments.number_of_threads.max(1));
    let small_image = Downsampler::new(&image, &threadpool).downsample();
    log::info!(
        "Downsampled to {}x{} on {} worker(s)",
        small_image.width(),
        small_image.height(),
        threadpool.max_count()
    );
    let output_file = open_output_file(&arguments.output_file)?;
    let mut writer = PPMImageWriter::new(BufWriter::new(&output_file), &small_image);
    writer.write_image()?;
    Ok(())
}
