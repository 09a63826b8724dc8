//! Service orchestration tests for fetch-and-read parsing.

use std::sync::Arc;

use crate::schedule::{
    adapters::{UniversalProjectReader, memory::InMemoryProjectFileFetcher},
    domain::{ProjectFile, ProjectFormat, ScheduleDomainError, ScheduleTask},
    ports::{
        ProjectFileFetchError, ProjectReadError, fetcher::MockProjectFileFetcher,
        reader::MockProjectReader,
    },
    services::{ScheduleParsingError, ScheduleParsingService},
};
use rstest::{fixture, rstest};

const SAMPLE_URL: &str = "https://files.example.com/office-move.xml";
const SAMPLE_XML: &[u8] = include_bytes!("../../../tests/fixtures/sample.xml");

type InMemoryService = ScheduleParsingService<InMemoryProjectFileFetcher, UniversalProjectReader>;

#[fixture]
fn service() -> InMemoryService {
    let fetcher = InMemoryProjectFileFetcher::new();
    fetcher
        .insert(SAMPLE_URL, SAMPLE_XML)
        .expect("fixture registration should succeed");
    ScheduleParsingService::new(Arc::new(fetcher), Arc::new(UniversalProjectReader::new()))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn parse_url_returns_one_record_per_task(service: InMemoryService) {
    let tasks = service
        .parse_url(SAMPLE_URL)
        .await
        .expect("parsing should succeed");

    let names: Vec<Option<&str>> = tasks.iter().map(ScheduleTask::name).collect();
    assert_eq!(
        names,
        vec![
            Some("Office Move"),
            Some("Plan & budget"),
            Some("Pack boxes"),
            None
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn parse_url_trims_body_whitespace(service: InMemoryService) {
    let tasks = service
        .parse_url(&format!("{SAMPLE_URL}\r\n"))
        .await
        .expect("parsing should succeed");
    assert_eq!(tasks.len(), 4);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn parse_url_rejects_empty_body(service: InMemoryService) {
    let result = service.parse_url("").await;

    assert!(matches!(
        result,
        Err(ScheduleParsingError::Domain(
            ScheduleDomainError::MissingFileUrl
        ))
    ));
    assert!(result.is_err_and(|err| err.is_missing_input()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn parse_url_reports_unknown_url_as_fetch_error(service: InMemoryService) {
    let err = service
        .parse_url("https://files.example.com/missing.xml")
        .await
        .expect_err("missing file should fail");
    assert!(matches!(err, ScheduleParsingError::Fetch(_)));
    assert!(!err.is_missing_input());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn parse_url_does_not_read_when_fetch_fails() {
    let mut fetcher = MockProjectFileFetcher::new();
    fetcher.expect_fetch().times(1).returning(|url| {
        Err(ProjectFileFetchError::Status {
            url: url.to_string(),
            status: 404,
        })
    });
    let mut reader = MockProjectReader::new();
    reader.expect_read().never();

    let service = ScheduleParsingService::new(Arc::new(fetcher), Arc::new(reader));
    let err = service
        .parse_url(SAMPLE_URL)
        .await
        .expect_err("fetch failure should propagate");
    assert_eq!(
        err.to_string(),
        format!("server returned HTTP 404 for {SAMPLE_URL}")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn parse_url_passes_fetched_bytes_to_reader() {
    let mut fetcher = MockProjectFileFetcher::new();
    fetcher
        .expect_fetch()
        .times(1)
        .returning(|_| Ok(b"payload".to_vec()));
    let mut reader = MockProjectReader::new();
    reader
        .expect_read()
        .withf(|bytes: &[u8]| bytes == b"payload")
        .times(1)
        .returning(|_| {
            Ok(ProjectFile::new(
                ProjectFormat::Mpx,
                vec![ScheduleTask::new().with_id(9)],
            ))
        });

    let service = ScheduleParsingService::new(Arc::new(fetcher), Arc::new(reader));
    let tasks = service
        .parse_url(SAMPLE_URL)
        .await
        .expect("parsing should succeed");

    assert_eq!(tasks, vec![ScheduleTask::new().with_id(9)]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn parse_bytes_decodes_uploaded_file(service: InMemoryService) {
    let tasks = service
        .parse_bytes(SAMPLE_XML.to_vec())
        .await
        .expect("parsing should succeed");
    assert_eq!(tasks.len(), 4);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn parse_bytes_rejects_empty_upload(service: InMemoryService) {
    let result = service.parse_bytes(Vec::new()).await;
    assert!(matches!(
        result,
        Err(ScheduleParsingError::Domain(ScheduleDomainError::MissingFile))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn parse_bytes_surfaces_read_errors(service: InMemoryService) {
    let result = service
        .parse_bytes(vec![0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1])
        .await;
    assert!(matches!(
        result,
        Err(ScheduleParsingError::Read(ProjectReadError::UnsupportedFormat(
            ProjectFormat::Mpp
        )))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reader_panic_is_reported_as_incomplete_decode() {
    let mut reader = MockProjectReader::new();
    reader
        .expect_read()
        .times(1)
        .returning(|_| panic!("reader crashed"));

    let service =
        ScheduleParsingService::new(Arc::new(MockProjectFileFetcher::new()), Arc::new(reader));
    let err = service
        .parse_bytes(b"payload".to_vec())
        .await
        .expect_err("panicking reader should fail");

    assert!(matches!(err, ScheduleParsingError::Decode(_)));
    assert!(!err.is_missing_input());
}
