// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
         _        _       _     _       _
     ___| | _____| |_ ___| |__ | | __ _| |__
    / __| |/ / _ \ __/ __| '_ \| |/ _` | '_ \
    \__ \   <  __/ || (__| | | | | (_| | |_) |
    |___/_|\_\___|\__\___|_| |_|_|\__,_|_.__/

    Image -> Code Generation Playground
"#;
    println!("{}", banner);
}
