/// Binary entrypoint for `run-game`.
fn main() {
    lithos_tools::run_game();
}
