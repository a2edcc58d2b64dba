use crate::clients::anilist::AnilistClient;
use crate::config::Config;

pub async fn cmd_query(config: &Config, episodes: Option<i32>) -> anyhow::Result<()> {
    let anilist = AnilistClient::from_config(&config.upstream)?;

    match anilist.fetch_media(episodes).await? {
        Some(media) => println!("{}", serde_json::to_string_pretty(&media)?),
        None => println!("No media found matching episodes = {episodes:?}"),
    }

    Ok(())
}
