use std::path::PathBuf;

use clap::{Parser, Subcommand};
use verse_align::audio::WavDurationProbe;
use verse_align::batch::CorpusLayout;
use verse_align::redistribute::{redistribute_collection, DEFAULT_TAIL_DURATION};
use verse_align::{batch, read_collection, transcript, write_collection};

#[derive(Parser, Debug)]
#[command(
    about = "Derive and correct word-level timestamps for recited verse audio",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize timestamps for a whole corpus and write the master collection
    Generate {
        /// Directory holding the transcript and audio files
        #[arg(long, default_value = ".")]
        corpus_dir: PathBuf,

        /// Number of chapters to process (1..=count)
        #[arg(long, default_value_t = 100)]
        count: u32,

        /// File name prefix shared by transcripts and audio
        #[arg(long, default_value = "Narayaneeyam_D")]
        file_prefix: String,

        /// Audio file extension
        #[arg(long, default_value = "wav")]
        audio_ext: String,

        /// Stem used to build record titles ("<stem> - Chapter <n>")
        #[arg(long, default_value = "Narayaneeyam")]
        title_stem: String,

        /// Path for the master collection JSON
        #[arg(long, default_value = "recitations_master_weighted_timed.json")]
        output: PathBuf,
    },
    /// Recompute word times from manually corrected verse times
    Redistribute {
        /// Collection (or single record) JSON with corrected verse times
        json_file: PathBuf,

        /// Output path; defaults to overwriting the input file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Assumed duration of the final verse, in seconds
        #[arg(long, default_value_t = DEFAULT_TAIL_DURATION)]
        tail_duration: f64,
    },
    /// Normalize transcript files in place (fold stranded verse-number markers)
    Cleanup {
        #[arg(long, default_value = ".")]
        corpus_dir: PathBuf,

        #[arg(long, default_value_t = 100)]
        count: u32,

        #[arg(long, default_value = "Narayaneeyam_D")]
        file_prefix: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Generate {
            corpus_dir,
            count,
            file_prefix,
            audio_ext,
            title_stem,
            output,
        } => {
            let layout = CorpusLayout {
                dir: corpus_dir,
                file_prefix,
                audio_ext,
                title_stem,
            };
            let units = layout.units(count);
            log::info!("processing {} units in parallel", units.len());

            let records = batch::run_batch(&units, &WavDurationProbe);
            write_collection(&output, &records)?;
            println!(
                "Wrote {} of {} records to {}",
                records.len(),
                units.len(),
                output.display()
            );
        }
        Command::Redistribute {
            json_file,
            output,
            tail_duration,
        } => {
            let mut records = read_collection(&json_file)?;
            redistribute_collection(&mut records, tail_duration);

            let output = output.unwrap_or(json_file);
            write_collection(&output, &records)?;
            println!(
                "Recalculated word timestamps for {} records, saved to {}",
                records.len(),
                output.display()
            );
        }
        Command::Cleanup {
            corpus_dir,
            count,
            file_prefix,
        } => {
            for chapter in 1..=count {
                let path = corpus_dir.join(format!("{}{:03}.txt", file_prefix, chapter));
                if !path.exists() {
                    log::warn!("{} not found, skipping", path.display());
                    continue;
                }
                match transcript::cleanup_file(&path) {
                    Ok(()) => log::info!("cleaned {}", path.display()),
                    Err(err) => log::warn!("failed to clean {}: {err}", path.display()),
                }
            }
        }
    }

    Ok(())
}
