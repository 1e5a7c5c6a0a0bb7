use yew::prelude::*;

use crate::models::hotel::PmsType;

#[derive(Properties, PartialEq)]
pub struct PmsBadgeProps {
    pub pms_type: PmsType,
}

#[function_component(PmsBadge)]
pub fn pms_badge(props: &PmsBadgeProps) -> Html {
    html! {
        <span class={classes!("badge", props.pms_type.css_class())}>
            {props.pms_type.badge_label()}
        </span>
    }
}
