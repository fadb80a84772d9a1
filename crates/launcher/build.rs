use std::env;
extern crate embed_resource;

fn main() {
    println!("cargo:rerun-if-changed=launcher.rc");
    if env::var_os("CARGO_CFG_WINDOWS").is_some() {
        embed_resource::compile("launcher.rc", embed_resource::NONE)
            .manifest_optional()
            .unwrap();
    }
}
