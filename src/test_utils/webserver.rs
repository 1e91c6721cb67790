use mockito::{mock, Matcher, Mock};

pub struct MockWebserver {
    _mock: Mock,
}

impl MockWebserver {
    pub fn from_json_with_query(
        path: &str,
        method: &str,
        query: Matcher,
        json_string: &str,
    ) -> Self {
        Self {
            _mock: mock(method, path)
                .match_query(query)
                .with_header("content-type", "application/json")
                .with_body(json_string)
                .create(),
        }
    }

    pub fn webserver_root_url(&self) -> String {
        mockito::server_url()
    }
}
