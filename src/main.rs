use office_png::{convert_all, Result, OFFICE_DESIGNS};

pub fn main() -> Result<()> {
    env_logger::init();
    convert_all(&OFFICE_DESIGNS, std::io::stdout().lock())
}
