use super::*;

/// Tests resetting zeroes every accumulator but keeps the last status.
///
/// Expected: Ok(2) with all accumulators zero, statuses unchanged, last_update moved
#[tokio::test]
async fn zeroes_accumulators_and_keeps_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = factory::create_guild_config(db).await?;
    let earlier = Utc::now() - Duration::hours(3);
    factory::member_stat::MemberStatFactory::new(db, config.guild_id)
        .member_id(1)
        .online_seconds(3600.0)
        .idle_seconds(12.5)
        .last_status("idle")
        .last_update(earlier)
        .build()
        .await?;
    factory::member_stat::MemberStatFactory::new(db, config.guild_id)
        .member_id(2)
        .dnd_seconds(99.0)
        .offline_seconds(1.0)
        .last_status("dnd")
        .last_update(earlier)
        .build()
        .await?;

    let now = Utc::now();
    let repo = GuildConfigRepository::new(db);
    let reset = repo
        .reset_member_stats(config.guild_id as u64, now)
        .await?;

    assert_eq!(reset, 2);
    let found = repo
        .find_by_guild_id(config.guild_id as u64)
        .await?
        .unwrap();
    for member in &found.members {
        assert_eq!(member.total(), 0.0);
        assert!(member.last_update > earlier);
    }
    assert_eq!(found.member(1).unwrap().last_status, Some(PresenceState::Idle));
    assert_eq!(found.member(2).unwrap().last_status, Some(PresenceState::Dnd));

    Ok(())
}

/// Tests resetting only affects the requested guild.
///
/// Expected: Ok with the other guild's accumulators intact
#[tokio::test]
async fn leaves_other_guilds_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_guild_config(db).await?;
    let other = factory::create_guild_config(db).await?;
    factory::member_stat::MemberStatFactory::new(db, other.guild_id)
        .online_seconds(50.0)
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let reset = repo
        .reset_member_stats(target.guild_id as u64, Utc::now())
        .await?;

    assert_eq!(reset, 0);
    let untouched = entity::prelude::MemberStat::find()
        .filter(entity::member_stat::Column::GuildId.eq(other.guild_id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(untouched.online_seconds, 50.0);

    Ok(())
}
