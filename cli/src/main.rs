//! Binary entrypoint for fontpair (made by FontLab https://www.fontlab.com/)

fn main() {
    if let Err(err) = fontpair_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
