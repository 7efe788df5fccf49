/// Binary entrypoint for `gen-texture`.
///
/// Keeps the binary thin; generation and encoding live in `lithos_tools` so
/// tests can call them directly.
fn main() {
    lithos_tools::gen_texture();
}
