use relay_network::frontend::cli;


fn main() {
    env_logger::init();

    cli::cli();
}
