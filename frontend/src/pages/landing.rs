use yew::prelude::*;

use crate::components::carousel::{Character, CharacterSlider};
use crate::components::header::{NavLink, SiteHeader};
use crate::components::hero::Hero;
use crate::components::lazy::{FeatureCard, LazyImage, SectionTitle};
use crate::components::newsletter::NewsletterForm;
use crate::components::stats::StatItem;
use crate::components::video::VideoEmbed;

const TRAILER_VIDEO_ID: &str = "dQw4w9WgXcQ";

fn nav_links() -> Vec<NavLink> {
    [
        ("Sobre", "#features"),
        ("Personagens", "#characters"),
        ("Trailer", "#trailer-section"),
        ("Números", "#stats"),
        ("Novidades", "#newsletter"),
    ]
    .into_iter()
    .map(|(label, href)| NavLink {
        label: AttrValue::Static(label),
        href: AttrValue::Static(href),
    })
    .collect()
}

fn characters() -> Vec<Character> {
    [
        ("Vera Cinza", "A estrategista", "/assets/characters/vera.webp"),
        ("Dante Ruído", "O sabotador", "/assets/characters/dante.webp"),
        ("Luz Ferraz", "A engenheira", "/assets/characters/luz.webp"),
        ("Bento Sombra", "O desertor", "/assets/characters/bento.webp"),
    ]
    .into_iter()
    .map(|(name, role, image)| Character {
        name: AttrValue::Static(name),
        role: AttrValue::Static(role),
        image: AttrValue::Static(image),
    })
    .collect()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <SiteHeader brand="CAOS" links={nav_links()} />

            <Hero subtitle="Uma nova temporada começa" title="Abrace o Caos">
                <a href="#newsletter" class="btn btn-primary">{"Entre na lista"}</a>
                <a href="#trailer-section" class="btn btn-secondary">{"Ver trailer"}</a>
            </Hero>

            <section id="features" class="features-section">
                <SectionTitle>{"O que te espera"}</SectionTitle>
                <div class="feature-grid">
                    <FeatureCard index={0} icon="fas fa-map" title="Mundo aberto">
                        <p>{"Explore uma cidade que muda a cada escolha."}</p>
                    </FeatureCard>
                    <FeatureCard index={1} icon="fas fa-users" title="Cooperativo">
                        <p>{"Até quatro jogadores na mesma partida."}</p>
                    </FeatureCard>
                    <FeatureCard index={2} icon="fas fa-bolt" title="Eventos ao vivo">
                        <p>{"Surpresas semanais que ninguém consegue prever."}</p>
                    </FeatureCard>
                </div>
                <div class="feature-showcase">
                    <LazyImage src="/assets/showcase.webp" alt="Cena do jogo" class={classes!("showcase-image")} />
                </div>
            </section>

            <section id="characters" class="characters-section">
                <SectionTitle>{"Personagens"}</SectionTitle>
                <CharacterSlider characters={characters()} />
            </section>

            <section id="trailer-section" class="trailer-section">
                <SectionTitle>{"Trailer oficial"}</SectionTitle>
                <VideoEmbed
                    video_id={AttrValue::Static(TRAILER_VIDEO_ID)}
                    poster="/assets/trailer-poster.webp"
                    title="Trailer oficial"
                />
            </section>

            <section id="stats" class="stats-section">
                <SectionTitle>{"Em números"}</SectionTitle>
                <div class="stats-grid">
                    <StatItem target="250000" label="jogadores na lista de espera" />
                    <StatItem target="1500" label="horas de desenvolvimento" />
                    <StatItem target="98" initial="0%" label="aprovação no beta" />
                    <StatItem target="12" label="personagens jogáveis" />
                </div>
            </section>

            <section id="newsletter" class="newsletter-section">
                <SectionTitle>{"Fique por dentro"}</SectionTitle>
                <p>{"Receba revelações exclusivas antes de todo mundo."}</p>
                <NewsletterForm />
            </section>

            <footer class="site-footer">
                <p>{"© Caos. Todos os direitos reservados."}</p>
            </footer>
        </div>
    }
}
