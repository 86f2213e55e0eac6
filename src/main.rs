use std::env::args_os;
use std::process;

use ppm_downsampler::{downsample_ppm, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match downsample_ppm(&arguments) {
        Ok(_) => println!("Downsampling successful"),
        Err(e) => {
            eprintln!("Downsampling failed because of: {}", e);
            process::exit(1);
        }
    }
}
