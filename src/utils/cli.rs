use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// Server listening host
    #[arg(long, env = "IMAGE_STORE_HOST", default_value = "127.0.0.1")]
    pub(crate) host: String,

    /// Server listening port
    #[arg(short, long, env = "IMAGE_STORE_PORT", default_value_t = 8968)]
    pub(crate) port: u16,

    /// Storage backend type
    #[arg(short, long, env = "IMAGE_STORE_STORAGE", default_value = "FILESYSTEM")]
    pub(crate) storage: String,

    /// Storage root path for uploaded images
    #[arg(long, env = "IMAGE_STORE_ROOTDIR", default_value = "images")]
    pub(crate) root: String,
}
