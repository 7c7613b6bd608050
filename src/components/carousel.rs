//! Looping gallery carousel over the site's projects.
//!
//! Slides per view come from the CSS breakpoints (`--per-view`); the track is
//! rendered twice so the trailing slots are filled when the last slide is first
//! in view. Slides keep the `gallery-item` role, so clicks open the project
//! overlay through the page dispatcher.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::info;
use yew::prelude::*;

use crate::config::{SiteContent, CAROUSEL_AUTOPLAY_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Prev,
    Go(usize),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn apply(self, action: CarouselAction) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = match action {
            CarouselAction::Next => (self.index + 1) % self.len,
            CarouselAction::Prev => (self.index + self.len - 1) % self.len,
            CarouselAction::Go(i) if i < self.len => i,
            CarouselAction::Go(_) => self.index,
        };
        Self { index, ..self }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let projects = &props.content.projects;
    let len = projects.len();
    let state = use_reducer(move || CarouselState::new(len));

    // Autoplay keeps running after manual navigation.
    {
        let state = state.clone();
        use_effect_with_deps(
            move |len| {
                let interval = (*len > 1).then(|| {
                    info!("Gallery carousel started with {} slides", len);
                    Interval::new(CAROUSEL_AUTOPLAY_MS, move || state.dispatch(CarouselAction::Next))
                });
                move || drop(interval)
            },
            len,
        );
    }

    if len == 0 {
        return html! {};
    }

    let prev = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Prev))
    };
    let next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Next))
    };

    html! {
        <div class="gallery-swiper">
            <div class="swiper-viewport">
                <div class="swiper-track" style={format!("--index: {};", state.index)}>
                    { for projects.iter().chain(projects.iter()).enumerate().map(|(i, project)| html! {
                        <figure
                            class="gallery-item swiper-slide"
                            data-role="gallery-item"
                            data-key={project.key.clone()}
                            aria-hidden={(i >= len).then_some("true")}
                        >
                            <img src={project.image.clone()} alt={project.title.clone()} loading="lazy" />
                            <figcaption>
                                <h3>{&project.title}</h3>
                                <p>{&project.description}</p>
                            </figcaption>
                        </figure>
                    }) }
                </div>
            </div>
            <button type="button" class="swiper-button-prev" aria-label="Anterior" onclick={prev}>{"‹"}</button>
            <button type="button" class="swiper-button-next" aria-label="Próximo" onclick={next}>{"›"}</button>
            <div class="swiper-pagination">
                { for (0..len).map(|i| {
                    let active = (i == state.index).then_some("active");
                    let state = state.clone();
                    html! {
                        <button
                            type="button"
                            class={classes!("swiper-pagination-bullet", active)}
                            aria-label={format!("Ir para o slide {}", i + 1)}
                            onclick={Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Go(i)))}
                        />
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_the_first_slide() {
        let mut s = CarouselState::new(3);
        for expected in [1, 2, 0, 1] {
            s = s.apply(CarouselAction::Next);
            assert_eq!(s.index, expected);
        }
    }

    #[test]
    fn prev_wraps_to_the_last_slide() {
        let s = CarouselState::new(3).apply(CarouselAction::Prev);
        assert_eq!(s.index, 2);
        assert_eq!(s.apply(CarouselAction::Prev).index, 1);
    }

    #[test]
    fn dots_jump_only_to_existing_slides() {
        let s = CarouselState::new(3).apply(CarouselAction::Go(2));
        assert_eq!(s.index, 2);
        assert_eq!(s.apply(CarouselAction::Go(3)).index, 2);
    }

    #[test]
    fn empty_gallery_never_moves() {
        let s = CarouselState::new(0);
        assert_eq!(s.apply(CarouselAction::Next), s);
        assert_eq!(s.apply(CarouselAction::Prev), s);
    }

    #[test]
    fn unchanged_index_keeps_the_same_rc() {
        let s = Rc::new(CarouselState::new(1));
        assert!(Rc::ptr_eq(&s, &s.clone().reduce(CarouselAction::Next)));
    }
}
