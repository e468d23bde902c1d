use leptos::{html, prelude::*};

use crate::component::Component;

/// Mounts a builder [`Component`] inside a Leptos view.
///
/// The server writes the rendered markup straight into the host `<div>`. Once
/// hydrated, the component is mounted again through [`crate::web::DomHost`]
/// so its listeners are live.
#[component]
pub fn ComponentHost<C>(
    component: C,
    #[prop(optional, into)] class: String,
) -> impl IntoView
where
    C: Component + Clone + Send + Sync + 'static,
{
    let markup = component.render().to_html();
    let host_ref = NodeRef::<html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move |_: Option<Option<crate::web::DomHost>>| {
        use crate::component::Mount;

        let el = host_ref.get()?;
        let mut host = crate::web::DomHost::new(el.into());
        let mut mount = Mount::new(component.clone());
        match mount.connect(&mut host) {
            Ok(()) => Some(host),
            Err(e) => {
                log::error!("mounting component: {e:?}");
                None
            }
        }
    });

    view! { <div node_ref=host_ref class=class inner_html=markup></div> }
}
