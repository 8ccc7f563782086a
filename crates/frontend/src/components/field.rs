use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub kind: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<InputEvent>,
    #[prop_or(true)]
    pub required: bool,
}

/// Labelled text input
#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    html! {
        <div>
            <label for={props.id.clone()} class="block text-sm font-medium text-gray-700">{ props.label.clone() }</label>
            <input
                id={props.id.clone()}
                type={props.kind.clone()}
                required={props.required}
                value={props.value.clone()}
                oninput={props.oninput.clone()}
                class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2"
            />
        </div>
    }
}
