use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("referent")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract, translate, and analyze articles")
        .arg(clap::arg!(<INPUT> "URL to fetch, local HTML file, or '-' for stdin"))
        .arg(clap::arg!(--extract_only "Stop after extraction and print the extracted fields as JSON"))
        .arg(
            clap::arg!(-a --action <ACTION> "Derive an artifact from the translation")
                .value_parser(["summary", "theses", "telegram"]),
        )
        .arg(clap::arg!(--source_url <URL> "Source link for the telegram post").value_name("URL"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(--model <MODEL> "Model identifier for the generation service").value_name("MODEL"))
        .arg(clap::arg!(-v --verbose "Enable progress logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "referent", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "referent", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "referent", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "referent", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
