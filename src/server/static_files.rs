//! Embedded presentation shell.
//!
//! The form, styling, and widget wiring are compiled into the binary so the
//! server ships as a single artifact with no asset directory.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Address Lookup</title>
<link rel="stylesheet" href="/style.css">
</head>
<body>
<main class="page">
  <h1>Address Lookup</h1>
  <form id="address-form" autocomplete="off">
    <input id="address-input" type="text" placeholder="Enter your street address">
    <button id="submit-btn" type="submit">Submit</button>
  </form>
  <div id="error-box" class="error hidden">
    <span id="error-text"></span>
    <button id="error-dismiss" type="button" aria-label="Dismiss">&times;</button>
  </div>
  <section id="result-card" class="card hidden">
    <h2>Selected Address</h2>
    <dl>
      <dt>Formatted Address</dt><dd id="r-formatted"></dd>
      <dt>City</dt><dd id="r-city"></dd>
      <dt>Country</dt><dd id="r-country"></dd>
      <dt>Latitude</dt><dd id="r-lat"></dd>
      <dt>Longitude</dt><dd id="r-lng"></dd>
    </dl>
  </section>
</main>
<script src="/app.js"></script>
</body>
</html>
"##;

pub const STYLE_CSS: &str = r##"* { box-sizing: border-box; }

body {
  margin: 0;
  font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
  background: #f3f4f6;
  color: #1f2937;
}

.page {
  max-width: 28rem;
  margin: 4rem auto;
  padding: 0 1rem;
}

h1 {
  text-align: center;
  color: #2563eb;
  margin-bottom: 2rem;
}

#address-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

#address-input {
  padding: 0.9rem 1.1rem;
  font-size: 1.05rem;
  border: 1px solid #d1d5db;
  border-radius: 0.5rem;
}

#address-input:focus {
  outline: 2px solid #2563eb;
  border-color: transparent;
}

#submit-btn {
  padding: 0.9rem;
  font-size: 1.05rem;
  color: #fff;
  background: #2563eb;
  border: none;
  border-radius: 0.5rem;
  cursor: pointer;
}

#submit-btn:hover { background: #1d4ed8; }
#submit-btn:disabled { background: #93c5fd; cursor: wait; }

.error {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-top: 1.5rem;
  padding: 1rem;
  background: #fee2e2;
  border: 1px solid #f87171;
  border-radius: 0.5rem;
  color: #b91c1c;
}

.error button {
  background: none;
  border: none;
  font-size: 1.2rem;
  color: inherit;
  cursor: pointer;
}

.card {
  margin-top: 2rem;
  padding: 1.5rem;
  background: #fff;
  border: 1px solid #e5e7eb;
  border-radius: 0.75rem;
}

.card h2 {
  margin-top: 0;
  text-align: center;
  color: #2563eb;
}

.card dt { font-weight: 600; margin-top: 0.8rem; }
.card dd { margin: 0.2rem 0 0; }

.hidden { display: none; }
"##;

pub const APP_JS: &str = r##"(function () {
  var form = document.getElementById("address-form");
  var input = document.getElementById("address-input");
  var button = document.getElementById("submit-btn");
  var errorBox = document.getElementById("error-box");
  var errorText = document.getElementById("error-text");
  var resultCard = document.getElementById("result-card");

  function showError(message) {
    errorText.textContent = message;
    errorBox.classList.remove("hidden");
  }

  function hideError() {
    errorBox.classList.add("hidden");
  }

  function renderRecord(record) {
    document.getElementById("r-formatted").textContent = record.formattedAddress || "";
    document.getElementById("r-city").textContent = record.city || "";
    document.getElementById("r-country").textContent = record.country || "";
    document.getElementById("r-lat").textContent =
      record.latitude === null ? "" : String(record.latitude);
    document.getElementById("r-lng").textContent =
      record.longitude === null ? "" : String(record.longitude);
    resultCard.classList.remove("hidden");
  }

  document.getElementById("error-dismiss").addEventListener("click", hideError);

  // Autocomplete is optional: without a browser key the form stays a plain
  // text input.
  fetch("/api/config")
    .then(function (res) { return res.json(); })
    .then(function (cfg) {
      if (!cfg.browserKey) return;
      window.__placesReady = function () {
        var autocomplete = new google.maps.places.Autocomplete(input);
        autocomplete.addListener("place_changed", function () {
          var place = autocomplete.getPlace();
          if (place.formatted_address) {
            input.value = place.formatted_address;
          } else if (place.name) {
            input.value = place.name;
          }
        });
      };
      var script = document.createElement("script");
      script.src = "https://maps.googleapis.com/maps/api/js?key="
        + encodeURIComponent(cfg.browserKey)
        + "&libraries=places&callback=__placesReady";
      script.async = true;
      document.head.appendChild(script);
    })
    .catch(function () { /* plain input */ });

  form.addEventListener("submit", function (e) {
    e.preventDefault();
    hideError();
    resultCard.classList.add("hidden");

    var address = input.value.trim();
    if (!address) {
      showError("Address field cannot be empty.");
      return;
    }

    button.disabled = true;
    button.textContent = "Submitting...";

    fetch("/api/geocode?address=" + encodeURIComponent(address))
      .then(function (res) { return res.json(); })
      .then(function (data) {
        if (data.error) {
          showError(data.error);
          return;
        }
        if (!data.city || !data.country) {
          showError("The selected address is incomplete. Please choose a more specific address.");
          return;
        }
        renderRecord(data);
      })
      .catch(function () {
        showError("An unexpected error occurred. Please try again later.");
      })
      .finally(function () {
        button.disabled = false;
        button.textContent = "Submit";
      });
  });
})();
"##;
