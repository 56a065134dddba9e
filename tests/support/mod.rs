#![allow(dead_code)]

use std::{collections::HashMap, fs, path::Path, time::Duration};

use async_trait::async_trait;
use rubrica::probes::{ProbeError, ProbeOutput, ToolRunner};

/// Scripted behavior for one (program, subcommand) pair.
pub enum Fake {
    /// The tool ran to completion with this outcome.
    Ok {
        success: bool,
        stdout: String,
        stderr: String,
    },
    /// The tool is not on the search path.
    Missing,
    /// The tool ran past its deadline.
    Timeout,
}

impl Fake {
    pub fn success(stdout: &str) -> Self {
        Fake::Ok {
            success: true,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    pub fn failure(stderr: &str) -> Self {
        Fake::Ok {
            success: false,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }
}

/// A scripted `ToolRunner`: responses are keyed by program name plus first
/// argument (`("git", "branch")`, `("mvn", "test")`). Unscripted invocations
/// behave as if the tool were missing.
#[derive(Default)]
pub struct FakeRunner {
    responses: HashMap<(String, String), Fake>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, program: &str, first_arg: &str, fake: Fake) -> Self {
        self.responses
            .insert((program.to_string(), first_arg.to_string()), fake);
        self
    }
}

#[async_trait]
impl ToolRunner for FakeRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        _cwd: &Path,
        limit: Duration,
    ) -> Result<ProbeOutput, ProbeError> {
        let key = (
            program.to_string(),
            args.first().copied().unwrap_or_default().to_string(),
        );

        match self.responses.get(&key) {
            Some(Fake::Ok {
                success,
                stdout,
                stderr,
            }) => Ok(ProbeOutput {
                success: *success,
                stdout: stdout.clone(),
                stderr: stderr.clone(),
            }),
            Some(Fake::Timeout) => Err(ProbeError::TimedOut(
                program.to_string(),
                limit.as_secs(),
            )),
            Some(Fake::Missing) | None => Err(ProbeError::ToolMissing(program.to_string())),
        }
    }
}

/// Writes `content` at `rel` under `root`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, content).expect("write fixture file");
}

/// Writes `len` bytes at `rel` under `root`; used for evidence images.
pub fn write_bytes(root: &Path, rel: &str, len: usize) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, vec![0u8; len]).expect("write fixture bytes");
}

/// A backend pom.xml declaring the full expected stack on Java 17.
pub const FULL_BACKEND_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
  <properties>
    <java.version>17</java.version>
  </properties>
  <dependencies>
    <dependency><artifactId>spring-boot-starter-web</artifactId></dependency>
    <dependency><artifactId>spring-boot-starter-data-jpa</artifactId></dependency>
    <dependency><artifactId>mysql-connector-j</artifactId></dependency>
  </dependencies>
</project>
"#;

/// A frontend pom.xml declaring Vaadin 24.
pub const FULL_FRONTEND_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
  <properties>
    <vaadin.version>24.3.5</vaadin.version>
  </properties>
  <dependencies>
    <dependency><groupId>com.vaadin</groupId><artifactId>vaadin</artifactId></dependency>
  </dependencies>
</project>
"#;

/// Populates `root` with a repository that satisfies every filesystem-backed
/// criterion (git state and Maven runs are still up to the `ToolRunner`).
pub fn populate_full_repo(root: &Path) {
    fs::create_dir_all(root.join(".git")).expect("create .git");

    write_file(root, "backend/pom.xml", FULL_BACKEND_POM);
    write_file(
        root,
        "backend/src/main/java/Videogame.java",
        "@Entity\npublic class Videogame {}\n",
    );
    write_file(
        root,
        "backend/src/main/java/VideogameRepository.java",
        "public interface VideogameRepository extends JpaRepository<Videogame, Long> {}\n",
    );
    write_file(
        root,
        "backend/src/main/java/VideogameController.java",
        "@RestController\n@RequestMapping(\"/api/videogames\")\npublic class VideogameController {}\n",
    );
    write_file(
        root,
        "backend/src/test/java/VideogameControllerTest.java",
        "public class VideogameControllerTest {\n  @Test void a() {}\n  @Test void b() {}\n  @Test void c() {}\n}\n",
    );

    write_file(root, "frontend/pom.xml", FULL_FRONTEND_POM);
    write_file(
        root,
        "frontend/src/main/java/MainView.java",
        "@Route(\"\")\npublic class MainView {\n  Grid<Videogame> grid = new Grid<>();\n  RestTemplate client = new RestTemplate();\n  Dialog editor = new Dialog();\n}\n",
    );

    write_file(
        root,
        "docker-compose.yml",
        "services:\n  backend:\n    image: backend\n  frontend:\n    image: frontend\n  db:\n    image: mysql\n",
    );
    write_file(root, "backend/Dockerfile", "FROM eclipse-temurin:17\n");
    write_file(root, "frontend/Dockerfile", "FROM eclipse-temurin:17\n");
    write_file(
        root,
        ".github/workflows/check_p15.yml",
        "name: check\njobs:\n  grade:\n    steps:\n      - uses: actions/checkout@v4\n      - uses: actions/setup-java@v4\n        with:\n          java-version: '17'\n      - run: cd backend && mvn test\n      - run: rubrica grade\n",
    );

    for name in ["ui_frontend", "tests_ok", "actions_ci", "docker_ps"] {
        write_bytes(root, &format!("evidencias/{name}.png"), 2048);
    }
}

/// Branch listing for a complete GitFlow history.
pub const FULL_BRANCHES: &str = "  develop\n  feature/catalog\n  feature/search\n  main\n  release/v1.0.0\n";

/// A runner scripted for a fully passing repository.
pub fn passing_runner() -> FakeRunner {
    FakeRunner::new()
        .with("git", "branch", Fake::success(FULL_BRANCHES))
        .with("git", "tag", Fake::success("v1.0.0\n"))
        .with("mvn", "test", Fake::success(""))
}
