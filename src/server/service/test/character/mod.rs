use crate::{
    model::character::RenameCharacterDto,
    server::{
        data::character::CharacterRepository,
        error::AppError,
        model::character::RenameCharacterParams,
        service::{character::CharacterService, leveling::LevelCurve},
    },
};
use test_utils::{builder::TestBuilder, factory};
