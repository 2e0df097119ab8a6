use std::marker::PhantomData;

use crate::screens::load::intent::LoadIntent;
use crate::screens::load::state::LoadState;
use crate::ui::mvi::Reducer;

pub struct LoadReducer<T>(PhantomData<fn() -> T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for LoadReducer<T> {
    type State = LoadState<T>;
    type Intent = LoadIntent<T>;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoadIntent::Started => LoadState::Loading,
            LoadIntent::Loaded(content) => LoadState::Success(content),
            LoadIntent::Failed(err) => LoadState::Error(err.to_string()),
        }
    }
}
