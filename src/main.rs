use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use structopt::StructOpt;

use lexitrie::dictionary::Dictionary;
use lexitrie::menu::Menu;
use lexitrie::store::Store;

/// Interactive word/meaning dictionary backed by a prefix tree.
#[derive(StructOpt)]
struct Cli {
    /// The backing dictionary file, one "word meaning" line per entry
    #[structopt(parse(from_os_str), default_value = "dictionary.txt")]
    path: PathBuf,
}

fn main() {
    let args = Cli::from_args();

    let store = Store::open(args.path.clone());
    let pairs = match store.load() {
        Ok(pairs) => pairs,
        Err(e) => {
            eprintln!("Error reading {}: {}", args.path.display(), e);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let mut dictionary = Dictionary::new();
    let mut failures: usize = 0;
    for (word, meaning) in pairs {
        if let Err(e) = dictionary.insert(&word, &meaning) {
            eprintln!("Skipping entry: {}", e);
            failures += 1;
        }
    }
    println!(
        "Loaded {} words from {} in {}s [{} skipped]",
        dictionary.len(),
        args.path.display(),
        start.elapsed().as_millis() as f64 / 1000.0,
        failures
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result =
        Menu::new(&mut dictionary, Some(&store)).run(&mut stdin.lock(), &mut stdout.lock());
    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}
