use yew::prelude::*;

use crate::components::{
    contact_footer::ContactFooter, hero::Hero, navbar::Navbar, portfolio::Portfolio,
    roi_calculator::RoiCalculator, services_bento::ServicesBento, team::Team,
    timeline::Timeline,
};
use crate::hooks::scroll_to_top;
use crate::store::StoreClient;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            if !StoreClient::from_config().is_configured() {
                gloo_console::warn!("Store key not set, portfolio and team will use offline content");
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Navbar />
            <Hero />
            <ServicesBento />
            <Portfolio />
            <RoiCalculator />
            <Timeline />
            <Team />
            <ContactFooter />
        </div>
    }
}
