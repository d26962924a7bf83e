use clap::{Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API and serve the frontend
    Serve {
        #[arg(short, long, default_value = "5000")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Generate a career guide once and print it
    Recommend {
        #[arg(short, long, default_value = "")]
        interests: String,

        #[arg(short, long, default_value = "")]
        education: String,

        #[arg(short, long, default_value = "")]
        aptitude: String,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Ask the career assistant a single question
    Chat { message: String },
}
