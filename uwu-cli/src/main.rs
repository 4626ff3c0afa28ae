use std::io;

fn main() -> io::Result<()> {
    uwu_cli::main()
}
