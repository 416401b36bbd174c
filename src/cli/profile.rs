use super::ProfileArgs;
use crate::config::Config;
use crate::store::{Store, UserProfile};
use anyhow::bail;
use chrono::Utc;

pub fn execute(args: ProfileArgs) -> anyhow::Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let store = Store::new(&config.data_dir);

    let mut profile = store.load_profile()?.unwrap_or_else(|| UserProfile {
        user_id: Utc::now().timestamp() as u64,
        ..Default::default()
    });

    if let Some(name) = args.name {
        profile.user_name = name;
    }
    if let Some(phone) = args.phone {
        profile.user_phone_no = phone;
    }
    if let Some(interests) = args.interests {
        profile.user_interests = interests;
    }

    if profile.user_phone_no.trim().is_empty() {
        bail!("a phone number is required (pass --phone); the planning backend keys sessions by it");
    }

    store.save_profile(&profile)?;
    println!(
        "Saved profile for {} ({})",
        if profile.user_name.is_empty() {
            "unnamed user"
        } else {
            profile.user_name.as_str()
        },
        profile.user_phone_no
    );
    Ok(())
}
