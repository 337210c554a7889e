use super::View;

pub const HOME: &str = "home";

const HOME_MARKUP: &str = r##"<div class="home">
  <h1>Contracts</h1>
  <p>Manage employees, contract templates and signed contracts.</p>
  <ul class="home-shortcuts">
    <li><a href="#/employees">Employees</a></li>
    <li><a href="#/templates">Templates</a></li>
    <li><a href="#/contracts">Contracts</a></li>
  </ul>
</div>"##;

/// Vista inicial, compilada en el binario
pub fn home_view() -> View {
    View::new(HOME, HOME_MARKUP)
}
