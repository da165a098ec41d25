use anyhow::Result;
use clap::Parser;
use provider::Provider;

/// List the type names of all data sources and manifests.
#[derive(Debug, Parser)]
pub(crate) struct Types {
    /// Only list manifests.
    #[clap(long = "manifests", conflicts_with = "data-sources")]
    manifests: bool,

    /// Only list data sources.
    #[clap(long = "data-sources")]
    data_sources: bool,
}

impl Types {
    pub(crate) async fn run(self, provider: Provider) -> Result<()> {
        for type_name in provider.type_names() {
            let is_manifest = type_name.ends_with("_manifest");
            if (self.manifests && !is_manifest) || (self.data_sources && is_manifest) {
                continue;
            }
            println!("{}", type_name);
        }
        Ok(())
    }
}
