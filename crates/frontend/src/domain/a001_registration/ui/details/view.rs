use super::view_model::{use_registration, RegistrationViewModel};
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use contracts::domain::a001_registration::{FormField, IMAGE_SLOT_COUNT};
use leptos::prelude::*;

fn field_value(vm: RegistrationViewModel, field: FormField) -> Signal<String> {
    Signal::derive(move || vm.field(field))
}

fn field_setter(vm: RegistrationViewModel, field: FormField) -> Callback<String> {
    Callback::new(move |value: String| vm.set_field(field, value))
}

/// Form when a profession is selected, otherwise the placeholder panel
#[component]
pub fn RegistrationPage() -> impl IntoView {
    let vm = use_registration();

    view! {
        <Show
            when=move || vm.is_profession_selected()
            fallback=|| view! { <RegistrationPlaceholder /> }
        >
            <RegistrationDetails />
        </Show>
    }
}

#[component]
pub fn RegistrationPlaceholder() -> impl IntoView {
    view! {
        <div class="details-container details-container--placeholder">
            <h2>"Business Directory Registration"</h2>
            <p>"Please select a profession from the dropdown in the header to begin registration."</p>
        </div>
    }
}

#[component]
fn RegistrationDetails() -> impl IntoView {
    let vm = use_registration();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h2>{move || format!("{} Registration Form", vm.selected_profession())}</h2>
            </div>

            <form class="details-form" on:submit=move |ev| vm.submit(ev)>
                <div class="form-row">
                    <Select
                        label="Category"
                        id="category"
                        name=FormField::Category.name()
                        value=field_value(vm, FormField::Category)
                        on_change=field_setter(vm, FormField::Category)
                        options=Signal::derive(move || vm.category_options())
                        placeholder="Select Category"
                        required=true
                    />
                    <Select
                        label="Sub Category"
                        id="sub-category"
                        name=FormField::SubCategory.name()
                        value=field_value(vm, FormField::SubCategory)
                        on_change=field_setter(vm, FormField::SubCategory)
                        options=Signal::derive(move || vm.sub_category_options())
                        placeholder="Select Sub Category"
                        disabled=Signal::derive(move || !vm.is_sub_category_enabled())
                    />
                </div>

                <div class="form-row">
                    <Input
                        label="Full Name"
                        id="name"
                        name=FormField::Name.name()
                        value=field_value(vm, FormField::Name)
                        on_input=field_setter(vm, FormField::Name)
                        required=true
                    />
                    <Input
                        label="Phone Number"
                        id="phone"
                        input_type="tel"
                        name=FormField::Phone.name()
                        value=field_value(vm, FormField::Phone)
                        on_input=field_setter(vm, FormField::Phone)
                        required=true
                    />
                </div>

                <Textarea
                    label="Address"
                    id="address"
                    name=FormField::Address.name()
                    value=field_value(vm, FormField::Address)
                    on_input=field_setter(vm, FormField::Address)
                    rows=3
                    required=true
                />

                <Input
                    label="Experience (in years)"
                    id="experience"
                    input_type="number"
                    min="0"
                    name=FormField::Experience.name()
                    value=field_value(vm, FormField::Experience)
                    on_input=field_setter(vm, FormField::Experience)
                    required=true
                />

                <ImageUploadGrid />

                <div class="form-actions">
                    <Button button_type="submit">"Submit Registration"</Button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn ImageUploadGrid() -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">"Upload Images (4 images max)"</label>
            <div class="image-grid">
                {(0..IMAGE_SLOT_COUNT)
                    .map(|index| view! { <ImageSlotTile index=index /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// One upload tile: hidden file input, preview or prompt, remove button
#[component]
fn ImageSlotTile(index: usize) -> impl IntoView {
    let vm = use_registration();
    let input_id = format!("image-{}", index);

    view! {
        <div class="image-slot">
            <input
                type="file"
                accept="image/*"
                class="image-slot__input"
                id=input_id.clone()
                on:change=move |ev| vm.pick_image(index, &ev)
            />
            <label class="image-slot__tile" for=input_id>
                {move || match vm.preview_url(index) {
                    Some(url) => view! {
                        <div class="image-slot__preview">
                            <img src=url alt=format!("Preview {}", index + 1) />
                            <div class="image-slot__overlay">"Click to change"</div>
                            <div class="image-slot__badge">"✓"</div>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <div class="image-slot__empty">
                            <div class="image-slot__plus">"+"</div>
                            <div>{format!("Upload Image {}", index + 1)}</div>
                        </div>
                    }
                    .into_any(),
                }}
            </label>
            <Show when=move || vm.has_image(index)>
                <Button
                    variant="danger"
                    class="image-slot__remove"
                    title="Remove image"
                    on_click=Callback::new(move |_| vm.remove_image(index))
                >
                    "×"
                </Button>
            </Show>
        </div>
    }
}
