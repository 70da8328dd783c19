use std::{env, path::PathBuf};

fn main() {
    println!("cargo::rustc-check-cfg=cfg(costella_unblock)");
    println!("cargo:rerun-if-env-changed=COSTELLA_UNBLOCK_DIR");

    let Ok(root) = env::var("COSTELLA_UNBLOCK_DIR") else {
        println!("cargo:warning=Building without the native unblock engine (COSTELLA_UNBLOCK_DIR not set)");
        return;
    };
    let root = PathBuf::from(root);

    println!("cargo:rustc-cfg=costella_unblock");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Link the engine library
    println!("cargo:rustc-link-search=native={}", root.join("lib").display());
    println!("cargo:rustc-link-lib=static=costella_unblock");
    println!("cargo:rerun-if-changed={}", root.join("include").display());

    //
    // ---- Generate engine bindings ----
    //
    let bindings = bindgen::Builder::default()
        .header_contents("unblock_wrapper.h", r#"
            #include <stdio.h>
            #include "costella_unblock.h"
        "#)
        .clang_arg(format!("-I{}", root.join("include").display()))
        // Lifecycle and entry point
        .allowlist_function("costella_unblock_initialize")
        .allowlist_function("costella_unblock_finalize")
        .allowlist_function("costella_unblock")
        // Log stream plumbing
        .allowlist_function("tmpfile")
        .allowlist_function("fflush")
        .allowlist_function("rewind")
        .allowlist_function("fread")
        .allowlist_function("fclose")
        // Types
        .allowlist_type("COSTELLA_IMAGE")
        .allowlist_type("FILE")
        .raw_line("// Mark extern blocks as unsafe for Rust 2024")
        .generate()
        .expect("Unable to generate unblock engine bindings");

    let out_path = out_dir.join("unblock_bindings.rs");
    bindings
        .write_to_file(&out_path)
        .expect("Couldn't write unblock engine bindings!");

    // Read the generated file and add unsafe to extern blocks
    let contents = std::fs::read_to_string(&out_path).unwrap();
    let fixed = contents.replace("extern \"C\" {", "unsafe extern \"C\" {");
    std::fs::write(&out_path, fixed).unwrap();
}
