//! Item owner contact card.
//!
//! Shows a user's avatar, name and contact details. The owner (or anyone on
//! their profile page) gets inputs instead of text and an Update button that
//! submits the locally edited copy in one go.

use dioxus::prelude::*;

use crate::api::{ContactUpdate, SafeUser};
use crate::components::icons::{CalendarIcon, HouseIcon, MailIcon, PhoneIcon};
use crate::components::{Avatar, Heading, TextInput};
use crate::forms::{ContactEditBuffer, ContactField};

/// Whether the viewer may edit `user`'s contact details.
#[must_use]
pub fn can_edit_contact(user: &SafeUser, current_user: Option<&SafeUser>, profile: bool) -> bool {
    profile || current_user.is_some_and(|current| current.id == user.id)
}

#[component]
pub fn ItemOwner(
    user: SafeUser,
    current_user: Option<SafeUser>,
    heading: Option<String>,
    #[props(default)] profile: bool,
    #[props(default)] saving: bool,
    on_update_user: EventHandler<ContactUpdate>,
) -> Element {
    let mut buffer = use_signal(|| ContactEditBuffer::from_user(&user));

    // Start over from the record whenever a new version of it arrives
    use_effect(use_reactive((&user,), move |(user,)| {
        buffer.set(ContactEditBuffer::from_user(&user));
    }));

    let editable = can_edit_contact(&user, current_user.as_ref(), profile);
    let edit = move |field: ContactField| move |evt: FormEvent| buffer.write().set(field, evt.value());
    let values = buffer.read().clone();
    let name = user.name.clone().unwrap_or_default();
    let email = user.email.clone().unwrap_or_default();

    rsx! {
        div {
            class: "item-owner",

            if let Some(heading) = heading {
                Heading { title: heading }
            }

            div {
                class: "item-owner-body",

                div {
                    class: "item-owner-name",
                    Avatar { src: user.image.clone() }
                    div { "{name}" }
                }

                form {
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        on_update_user.call(buffer.read().to_update());
                    },

                    div {
                        class: "item-owner-fields",

                        if user.phone.is_some() {
                            div {
                                class: "item-owner-row",
                                PhoneIcon { size: 24 }
                                if editable {
                                    input {
                                        r#type: "text",
                                        value: "{values.phone}",
                                        oninput: edit(ContactField::Phone),
                                    }
                                } else {
                                    div { "{values.phone}" }
                                }
                            }
                        }

                        div {
                            class: "item-owner-row",
                            MailIcon { size: 24 }
                            div { "{email}" }
                        }

                        if user.pickup_address.is_some() {
                            div {
                                class: "item-owner-row item-owner-address",
                                HouseIcon { size: 26 }
                                if editable {
                                    TextInput {
                                        id: "pickup-address",
                                        label: "Pickup address",
                                        value: values.pickup_address.clone(),
                                        multiline: true,
                                        disabled: saving,
                                        on_input: move |value| {
                                            buffer.write().set(ContactField::PickupAddress, value);
                                        },
                                    }
                                } else {
                                    div { "{values.pickup_address}" }
                                }
                            }
                        }

                        if user.final_pickup_date.is_some() {
                            div {
                                class: "item-owner-row",
                                CalendarIcon { size: 24 }
                                div { "Pick up before" }
                                div {
                                    class: "item-owner-deadline",
                                    if editable {
                                        input {
                                            r#type: "date",
                                            value: "{values.final_pickup_date}",
                                            oninput: edit(ContactField::FinalPickupDate),
                                        }
                                    } else {
                                        div { "{values.final_pickup_date}" }
                                    }
                                }
                            }
                        }

                        if editable {
                            div {
                                button {
                                    class: "item-owner-update",
                                    r#type: "submit",
                                    disabled: saving,
                                    "Update"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
