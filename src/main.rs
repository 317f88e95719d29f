//! Connect X terminal game

use std::path::PathBuf;

use clap::Parser;

use connectx::save::{SaveFile, DEFAULT_SAVE_FILE};
use connectx::ui::App;

#[derive(Parser, Debug)]
#[command(name = "connectx", about = "Play Connect X in the terminal")]
struct Args {
    /// Where the running game is saved after every move
    #[arg(long, default_value = DEFAULT_SAVE_FILE)]
    save_file: PathBuf,

    /// Start a new game without offering to resume a saved one
    #[arg(long)]
    new: bool,
}

fn main() {
    let args = Args::parse();
    let mut app = App::new(SaveFile::new(args.save_file));
    if let Err(err) = app.run(!args.new) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
