use number_sniffer::find_largest_number_in_text;

fn main() {
    env_logger::init();

    let text = "Revenue grew from $850,000 in 2022 to $1.2 million, with 48200 units shipped.";

    let best = find_largest_number_in_text(text).unwrap();

    println!("Largest number in the given text \"{}\"", text);
    println!("{} (from \"{}\")", best.value, best.text);
}
