use log::{error, info};
use number_sniffer::utils::{read_pages_from_csv, read_pages_from_text};
use number_sniffer::{find_largest_number, Error, Page};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

fn read_pages(args: &[String]) -> Result<Vec<Page>, Error> {
    // No files given: the whole document comes from stdin
    if args.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;

        return Ok(read_pages_from_text(&input));
    }

    let mut pages = Vec::new();

    for arg in args {
        let path = Path::new(arg);
        let contents = fs::read_to_string(path)?;

        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        if is_csv {
            pages.extend(read_pages_from_csv(&contents)?);
        } else {
            pages.extend(read_pages_from_text(&contents));
        }

        info!("Read {:?} ({} pages so far)", path, pages.len());
    }

    Ok(pages)
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let pages = match read_pages(&args) {
        Ok(pages) => pages,
        Err(e) => {
            error!("Failed to read input: {}", e);
            std::process::exit(1);
        }
    };

    match find_largest_number(&pages) {
        Ok(best) => {
            println!("value: {}", best.value);
            println!("text: {}", best.text);
            println!("page: {}", best.page_index);
        }
        Err(Error::NoNumericDataFound) => {
            println!("No numeric data found");
            std::process::exit(2);
        }
        Err(e) => {
            error!("Error finding largest number: {}", e);
            std::process::exit(1);
        }
    }
}
