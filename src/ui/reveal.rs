//! Scroll-triggered reveal animation
//!
//! [`Reveal`] marks content with the `reveal` class; a single
//! [`RevealScript`] observes those elements and adds `visible` once they
//! enter the viewport. Elements added later by client-side navigation are
//! picked up through a `MutationObserver`.

use leptos::prelude::*;

/// Delay step between consecutive reveals in a row (milliseconds)
pub const STAGGER_MS: u32 = 100;

/// Fade-and-rise wrapper
#[component]
pub fn Reveal(
    children: Children,
    /// Transition delay in milliseconds
    #[prop(default = 0)]
    delay_ms: u32,
    /// Extra CSS classes for the wrapper
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div
            class=format!("reveal {}", class)
            style=format!("transition-delay: {}ms", delay_ms)
        >
            {children()}
        </div>
    }
}

/// Delay for the `index`th item of a staggered list
pub fn stagger(index: usize) -> u32 {
    index as u32 * STAGGER_MS
}

/// Styles and observer script driving every [`Reveal`] on the page
#[component]
pub fn RevealScript() -> impl IntoView {
    view! {
        <style>
            r#"
            .reveal { opacity: 0; transform: translateY(40px); transition: opacity .5s cubic-bezier(.25,.4,.25,1), transform .5s cubic-bezier(.25,.4,.25,1); }
            .reveal.visible { opacity: 1; transform: none; }
            @media (prefers-reduced-motion: reduce) {
                .reveal { opacity: 1; transform: none; transition: none; }
            }
            "#
        </style>
        <script>
            r#"
            (function() {
                function initReveal() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    const observeAll = () => {
                        document.querySelectorAll('.reveal:not(.visible)').forEach(el => observer.observe(el));
                    };

                    observeAll();
                    new MutationObserver(observeAll).observe(document.body, { childList: true, subtree: true });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initReveal);
                } else {
                    initReveal();
                }
            })();
            "#
        </script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_steps() {
        assert_eq!(stagger(0), 0);
        assert_eq!(stagger(3), 300);
    }
}
