use cimc_drv::{run, Config};

fn main() {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        },
    };
    std::process::exit(run(&config));
}
