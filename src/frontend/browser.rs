use gloo_net::http::Request;
use url::Url;
use web_sys::{window, FormData, Storage};

use crate::contact::{FormPayload, RelayBody, RelayReply, Transport, TransportError};
use crate::error::DomError;
use crate::theme::PreferenceStore;

use super::dom::js_error_text;

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

#[derive(Clone, Copy, Default)]
pub struct LocalPreferenceStore;

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomError> {
        let storage = local_storage().ok_or_else(|| DomError::missing("localStorage"))?;
        storage.set_item(key, value)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Default)]
pub struct RelayTransport;

impl Transport for RelayTransport {
    async fn post_form(&self, endpoint: &Url, payload: &FormPayload) -> Result<RelayReply, TransportError> {
        let form_data = FormData::new().map_err(|error| TransportError::Network(js_error_text(&error)))?;
        for (name, value) in payload.fields() {
            form_data
                .append_with_str(name, value)
                .map_err(|error| TransportError::Network(js_error_text(&error)))?;
        }

        let response = Request::post(endpoint.as_str())
            .body(form_data)
            .map_err(|error| TransportError::Network(error.to_string()))?
            .send()
            .await
            .map_err(|error| TransportError::Network(error.to_string()))?;

        let status = response.status();
        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|error| TransportError::Decode(error.to_string()))?;

        Ok(RelayReply {
            status,
            body: RelayBody::from_json(&body),
        })
    }
}
